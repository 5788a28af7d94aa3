//! Resolve-and-instantiate.
//!
//! # Data Flow
//! ```text
//! RequestContext.path
//!     → normalize (strip from first ';')       Received → Normalized
//!     → registry lookup                        → Resolved | NotFound
//!     → descriptor.instantiate()               → Instantiated | InstantiationFailed
//!     → action.initialise(request, response)   → Initialised
//! ```
//!
//! # Design Decisions
//! - Synchronous and non-blocking; runs inside the caller's task
//! - No retry and no local recovery: both failures go back to the caller intact

use crate::action::{AutomatedAction, RequestContext, ResponseContext};
use crate::registry::error::DispatchError;
use crate::registry::identifier::RouteIdentifier;
use crate::registry::table::Registry;

impl Registry {
    /// Resolve the handler for `request`, construct it and inject the contexts.
    pub fn dispatch(
        &self,
        request: RequestContext,
        response: ResponseContext,
    ) -> Result<Box<dyn AutomatedAction>, DispatchError> {
        let identifier = RouteIdentifier::from_path(request.path());
        let mut action = self.instantiate(&identifier)?;

        tracing::debug!(
            request_id = %request.request_id(),
            identifier = %identifier,
            handler = action.name(),
            "Dispatching automated action"
        );

        action.initialise(request, response);
        Ok(action)
    }

    /// Construct a fresh, uninitialised handler for a normalized identifier.
    pub fn instantiate(
        &self,
        identifier: &RouteIdentifier,
    ) -> Result<Box<dyn AutomatedAction>, DispatchError> {
        let descriptor =
            self.resolve(identifier.as_str())
                .ok_or_else(|| DispatchError::RouteNotFound {
                    identifier: identifier.clone(),
                })?;

        descriptor.instantiate().map_err(|source| {
            tracing::error!(
                identifier = %identifier,
                error = %source,
                "Could not create action"
            );
            DispatchError::HandlerInstantiation {
                identifier: identifier.clone(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionAttributes, ActionError};
    use crate::registry::descriptor::HandlerDescriptor;
    use crate::registry::error::ConstructionError;

    #[derive(Debug, Default)]
    struct Echo {
        attributes: ActionAttributes,
    }

    impl AutomatedAction for Echo {
        fn name(&self) -> &'static str {
            "Echo"
        }

        fn attributes(&self) -> &ActionAttributes {
            &self.attributes
        }

        fn attributes_mut(&mut self) -> &mut ActionAttributes {
            &mut self.attributes
        }

        fn execute(&mut self) -> Result<(), ActionError> {
            let path = self.attributes.request()?.path().to_string();
            self.attributes.response_mut().set_body(path);
            Ok(())
        }
    }

    fn failing_factory() -> Result<Box<dyn AutomatedAction>, ConstructionError> {
        Err(ConstructionError::Failed {
            handler: "Broken",
            reason: "missing credentials".to_string(),
        })
    }

    fn registry() -> Registry {
        let mut builder = Registry::builder();
        builder
            .map::<Echo>("/auto/x")
            .unmapped("/auto/emailWorker")
            .register(
                "/auto/broken",
                HandlerDescriptor::with_factory("Broken", failing_factory),
            );
        builder.build()
    }

    #[test]
    fn test_dispatch_returns_initialised_action() {
        let mut action = registry()
            .dispatch(RequestContext::new("/auto/x"), ResponseContext::default())
            .unwrap();

        assert!(action.is_initialised());
        assert_eq!(action.type_name(), std::any::type_name::<Echo>());
        action.execute().unwrap();
        assert_eq!(action.take_response().body().as_ref(), b"/auto/x");
    }

    #[test]
    fn test_dispatch_keeps_raw_path_in_request() {
        let mut action = registry()
            .dispatch(
                RequestContext::new("/auto/x;jsessionid=123"),
                ResponseContext::default(),
            )
            .unwrap();

        assert_eq!(action.name(), "Echo");
        action.execute().unwrap();
        assert_eq!(
            action.take_response().body().as_ref(),
            b"/auto/x;jsessionid=123"
        );
    }

    #[test]
    fn test_dispatch_unknown_route() {
        let err = registry()
            .dispatch(
                RequestContext::new("/auto/missing;x=1"),
                ResponseContext::default(),
            )
            .unwrap_err();

        match err {
            DispatchError::RouteNotFound { identifier } => {
                assert_eq!(identifier.as_str(), "/auto/missing")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dispatch_unmapped_route() {
        let err = registry()
            .dispatch(
                RequestContext::new("/auto/emailWorker;foo=bar"),
                ResponseContext::default(),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            DispatchError::HandlerInstantiation {
                source: ConstructionError::Unmapped,
                ..
            }
        ));
        assert_eq!(err.identifier().as_str(), "/auto/emailWorker");
    }

    #[test]
    fn test_dispatch_factory_failure() {
        let err = registry()
            .dispatch(RequestContext::new("/auto/broken"), ResponseContext::default())
            .unwrap_err();

        assert!(err.is_fatal());
        assert_eq!(
            err.to_string(),
            "Could not create the action for /auto/broken: Broken could not be constructed: missing credentials"
        );
    }

    #[test]
    fn test_instantiate_does_not_initialise() {
        let action = registry()
            .instantiate(&RouteIdentifier::new("/auto/x"))
            .unwrap();
        assert!(!action.is_initialised());
    }
}
