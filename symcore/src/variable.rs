use crate::{error::InvalidArgument, Result};
use std::{fmt, sync::Arc};
use symcore_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named symbol, such as `x` or `theta`.
///
/// Two variables are the same variable if and only if their names are equal. The name is stored
/// behind an [`Arc`], so cloning a variable is cheap; variables are freely shared between every
/// expression that mentions them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable(Arc<str>);

impl Variable {
    /// Creates a variable with the given name.
    ///
    /// Returns an [`InvalidArgument`] error if the name is empty or contains whitespace.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(Error::new(
                "\"\"",
                InvalidArgument { reason: "a variable name cannot be empty".to_string() },
            ));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(Error::new(
                format!("{:?}", name),
                InvalidArgument { reason: "a variable name cannot contain whitespace".to_string() },
            ));
        }

        Ok(Self(Arc::from(name)))
    }

    /// Returns the name of the variable.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Variable {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::InvalidArgument;
    use std::collections::HashMap;
    use super::*;

    #[test]
    fn equality_by_name() {
        let a = Variable::new("x").unwrap();
        let b = Variable::try_from("x").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Variable::new("y").unwrap());

        let mut map = HashMap::new();
        map.insert(a, 1);
        assert_eq!(map.get(&b), Some(&1));
    }

    #[test]
    fn empty_name_is_invalid() {
        let err = Variable::new("").unwrap_err();
        assert!(err.is::<InvalidArgument>());
    }

    #[test]
    fn whitespace_is_invalid() {
        assert!(Variable::new("x y").unwrap_err().is::<InvalidArgument>());
    }
}
