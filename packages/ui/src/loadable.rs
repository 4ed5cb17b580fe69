use api::ApiError;

/// Request lifecycle of one piece of view data.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(e) => Loadable::Failed(e.to_string()),
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: Loadable<u32> = Loadable::from_result(Ok(3));
        assert_eq!(ok, Loadable::Ready(3));

        let failed: Loadable<u32> = Loadable::from_result(Err(ApiError::Server {
            status: 500,
            message: "Failed to load posts".into(),
        }));
        assert_eq!(failed, Loadable::Failed("Failed to load posts".to_string()));
    }

    #[test]
    fn test_default_is_loading() {
        let state: Loadable<Vec<u8>> = Loadable::default();
        assert_eq!(state, Loadable::Loading);
    }
}
