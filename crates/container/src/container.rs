//! Named lazy singletons, resolved on first use and cached for the lifetime
//! of the container.

use std::{
    any::Any,
    collections::HashMap,
    sync::Arc,
};

use once_cell::sync::OnceCell;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Instance = Arc<dyn Any + Send + Sync>;
type Factory = Box<dyn Fn() -> Result<Instance, BoxError> + Send + Sync>;

struct Binding {
    factory: Factory,
    instance: OnceCell<Instance>,
}

#[derive(Default)]
pub struct Container {
    bindings: HashMap<String, Binding>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `factory`. The factory runs at most once successfully;
    /// rebinding a name drops any instance already built for it.
    pub fn singleton<T, E, F>(&mut self, name: impl Into<String>, factory: F)
    where
        T: Any + Send + Sync,
        E: Into<BoxError>,
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        let factory: Factory = Box::new(move || {
            factory()
                .map(|value| Arc::new(value) as Instance)
                .map_err(Into::into)
        });
        self.bindings.insert(
            name.into(),
            Binding {
                factory,
                instance: OnceCell::new(),
            },
        );
    }

    pub fn bound(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn resolved(&self, name: &str) -> bool {
        self.bindings
            .get(name)
            .is_some_and(|binding| binding.instance.get().is_some())
    }

    pub fn make<T>(&self, name: &str) -> Result<Arc<T>, ContainerError>
    where
        T: Any + Send + Sync,
    {
        let binding = self
            .bindings
            .get(name)
            .ok_or_else(|| ContainerError::NotBound {
                name: name.to_string(),
            })?;
        let instance = binding
            .instance
            .get_or_try_init(|| (binding.factory)())
            .map_err(|source| ContainerError::Build {
                name: name.to_string(),
                source,
            })?;

        Arc::clone(instance)
            .downcast::<T>()
            .map_err(|_| ContainerError::TypeMismatch {
                name: name.to_string(),
            })
    }
}

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("no binding registered for `{name}`")]
    NotBound { name: String },
    #[error("binding `{name}` holds a different type")]
    TypeMismatch { name: String },
    #[error("failed to build `{name}`: {source}")]
    Build {
        name: String,
        #[source]
        source: BoxError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_container(calls: Arc<AtomicUsize>) -> Container {
        let mut container = Container::new();
        container.singleton("counter", move || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, BoxError>(format!("instance-{n}"))
        });
        container
    }

    #[test]
    fn resolves_once_and_caches() {
        let calls = Arc::new(AtomicUsize::new(0));
        let container = counting_container(calls.clone());
        assert!(container.bound("counter"));
        assert!(!container.resolved("counter"));

        let first = container.make::<String>("counter").unwrap();
        let second = container.make::<String>("counter").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(container.resolved("counter"));
    }

    #[test]
    fn concurrent_resolution_builds_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let container = counting_container(calls.clone());

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| container.make::<String>("counter").unwrap());
            }
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unknown_and_mistyped_lookups_fail() {
        let container = counting_container(Arc::new(AtomicUsize::new(0)));
        assert!(matches!(
            container.make::<String>("missing"),
            Err(ContainerError::NotBound { .. })
        ));
        assert!(matches!(
            container.make::<u32>("counter"),
            Err(ContainerError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn factory_errors_are_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut container = Container::new();
        container.singleton("flaky", move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(BoxError::from("first attempt fails"))
            } else {
                Ok(7_u32)
            }
        });

        let err = container.make::<u32>("flaky").unwrap_err();
        assert_eq!(err.to_string(), "failed to build `flaky`: first attempt fails");
        assert_eq!(*container.make::<u32>("flaky").unwrap(), 7);
    }
}
