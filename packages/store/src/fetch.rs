use std::fmt::Display;

/// Cache entry for a resource fetched on demand.
///
/// A resource is requested at most once while it is `Loading` or `Loaded`;
/// only `NotFetched` and `Failed` entries start a new fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum Fetch<T> {
    NotFetched,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Fetch::NotFetched
    }
}

impl<T> Fetch<T> {
    pub fn should_fetch(&self) -> bool {
        matches!(self, Fetch::NotFetched | Fetch::Failed(_))
    }

    /// Mark the entry as loading. Returns `false` when a fetch is not needed.
    pub fn begin(&mut self) -> bool {
        if !self.should_fetch() {
            return false;
        }
        *self = Fetch::Loading;
        true
    }

    pub fn finish<E: Display>(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(value) => Fetch::Loaded(value),
            Err(e) => Fetch::Failed(e.to_string()),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Fetch::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Fetch::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Fetch::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_only_once_until_failure() {
        let mut entry: Fetch<Vec<u32>> = Fetch::default();
        assert!(entry.begin());
        assert!(entry.is_loading());
        assert!(!entry.begin());

        entry.finish::<String>(Err("offline".to_string()));
        assert_eq!(entry.error(), Some("offline"));

        // A failed entry may be retried
        assert!(entry.begin());
        entry.finish::<String>(Ok(vec![1, 2]));
        assert_eq!(entry.loaded(), Some(&vec![1, 2]));
        assert!(!entry.begin());
    }

    #[test]
    fn test_loaded_mut() {
        let mut entry = Fetch::Loaded(vec![1, 2, 3]);
        if let Some(items) = entry.loaded_mut() {
            items.retain(|n| *n != 2);
        }
        assert_eq!(entry, Fetch::Loaded(vec![1, 3]));
        assert!(Fetch::<u8>::Loading.loaded().is_none());
    }
}
