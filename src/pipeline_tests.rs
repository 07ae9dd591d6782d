#[cfg(test)]
mod pipeline_composition_tests {
    use crate::error::{Error, ErrorKind, ValidationError};
    use crate::extension::Extension;
    use crate::rules::{Rule, State};
    use crate::validation::disposable::DisposableDomains;
    use crate::validation::dnsmx::{MockMxLookup, MxChecker, MxConfig};
    use crate::validation::patterns::Mode;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn extension_with_lookup(lookup: MockMxLookup) -> Extension {
        Extension::new(
            Arc::new(DisposableDomains::new(["mailinator.org", "gmail.com.disposable"])),
            MxChecker::new(Arc::new(lookup), &MxConfig::default()),
        )
    }

    fn extension(mx_count: usize) -> Extension {
        let mut lookup = MockMxLookup::new();
        lookup.expect_mx_record_count().returning(move |_| Ok(mx_count));
        extension_with_lookup(lookup)
    }

    /// Counts how many values reach it.
    struct Recorder {
        seen: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Rule for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn description(&self) -> &'static str {
            "Counts values"
        }

        async fn validate(&self, value: String, _state: &State) -> Result<String, ValidationError> {
            self.seen.fetch_add(1, Ordering::SeqCst);
            Ok(value)
        }
    }

    #[tokio::test]
    async fn test_rules_apply_in_declared_order() {
        let schema = extension(1)
            .string()
            .normalize()
            .domains(&["google.com".into()], Mode::Exact)
            .unwrap();

        // normalize runs first, so the mixed-case domain matches exactly
        assert_eq!(
            schema.validate("John.Doe@gooGLe.com").await.unwrap(),
            "john.doe@google.com"
        );
    }

    #[tokio::test]
    async fn test_reversed_order_changes_outcome() {
        let schema = extension(1)
            .string()
            .domains(&["google.com".into()], Mode::Exact)
            .unwrap()
            .normalize();

        let err = schema.validate("John.Doe@gooGLe.com").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::DomainPatterns);
        assert_eq!(err.value, "John.Doe@gooGLe.com");
    }

    #[tokio::test]
    async fn test_rejected_value_never_reaches_later_rules() {
        let seen = Arc::new(AtomicUsize::new(0));
        let schema = extension(1)
            .string()
            .non_disposable()
            .rule(Box::new(Recorder { seen: Arc::clone(&seen) }));

        assert!(schema.validate("x@mailinator.org").await.is_err());
        assert_eq!(seen.load(Ordering::SeqCst), 0);

        assert!(schema.validate("x@google.com").await.is_ok());
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_mx_not_queried_after_earlier_failure() {
        let mut lookup = MockMxLookup::new();
        lookup.expect_mx_record_count().never();
        let schema = extension_with_lookup(lookup).string().non_disposable().has_mx();

        let err = schema.validate("john.doe@mailinator.org").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NonDisposable);
    }

    #[tokio::test]
    async fn test_full_pipeline() {
        let schema = extension(2)
            .string()
            .label("email")
            .normalize()
            .domains(&["*.com".into()], Mode::Glob)
            .unwrap()
            .non_disposable()
            .has_mx();

        assert_eq!(
            schema.validate("J.Doe+promo@GoogleMail.com").await.unwrap(),
            "jdoe@gmail.com"
        );
    }

    #[tokio::test]
    async fn test_no_mx_fails_last() {
        let schema = extension(0).string().normalize().non_disposable().has_mx();
        let err = schema.validate("John.Doe@somedomainwithinvaliddnsrecords.com").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NoMx);
        assert_eq!(err.value, "john.doe@somedomainwithinvaliddnsrecords.com");
    }

    #[test]
    fn test_validate_blocking() {
        let schema = extension(1).string().normalize().has_mx();
        assert_eq!(
            schema.validate_blocking("John.Doe@gooGLe.com").unwrap(),
            "john.doe@google.com"
        );
    }

    #[test]
    fn test_validate_blocking_reports_failure() {
        let schema = extension(0).string().has_mx();
        let err = schema.validate_blocking("a@b.invalid").unwrap_err();
        assert!(matches!(err, Error::Validation(ref e) if e.kind == ErrorKind::NoMx));
    }
}
