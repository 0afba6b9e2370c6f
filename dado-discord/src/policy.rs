use std::collections::HashSet;

/// Decides who may run privileged commands
pub trait Policy: Send + Sync {
    fn is_privileged(&self, user: u64) -> bool;
}

/// Allowlist of user ids
#[derive(Debug, Clone, Default)]
pub struct Masters {
    ids: HashSet<u64>,
}

impl Masters {
    pub fn new<I: IntoIterator<Item = u64>>(ids: I) -> Self {
        Masters {
            ids: ids.into_iter().collect(),
        }
    }
}

impl Policy for Masters {
    fn is_privileged(&self, user: u64) -> bool {
        self.ids.contains(&user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masters_test() {
        let masters = Masters::new([1, 2]);
        assert!(masters.is_privileged(1));
        assert!(masters.is_privileged(2));
        assert!(!masters.is_privileged(3));
        assert!(!Masters::default().is_privileged(1));
    }

    #[test]
    fn policy_as_trait_object_test() {
        let policy: Box<dyn Policy> = Box::new(Masters::new([42]));
        assert!(policy.is_privileged(42));
        assert!(!policy.is_privileged(7));
    }
}
