use std::{collections::HashSet, fmt};

/// Level whitelist of a sink.
///
/// `All` is the absent filter. `Only` with an empty set is a real whitelist
/// that lets nothing through.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Only(HashSet<super::Level>),
}

impl LevelFilter {
    /// No levels means no filter; otherwise exactly the given levels pass.
    pub fn from_levels<I>(levels: I) -> Self
    where
        I: IntoIterator<Item = super::Level>,
    {
        let set: HashSet<super::Level> = levels.into_iter().collect();
        if set.is_empty() {
            Self::All
        } else {
            Self::Only(set)
        }
    }

    pub fn none() -> Self {
        Self::Only(HashSet::new())
    }

    pub fn allows(&self, level: super::Level) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => set.contains(&level),
        }
    }
}

impl From<Option<Vec<super::Level>>> for LevelFilter {
    fn from(levels: Option<Vec<super::Level>>) -> Self {
        match levels {
            None => Self::All,
            Some(levels) => Self::Only(levels.into_iter().collect()),
        }
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(set) if set.is_empty() => write!(f, "none"),
            Self::Only(set) => {
                let levels: Vec<&str> = super::Level::ALL
                    .iter()
                    .filter(|level| set.contains(*level))
                    .map(|level| level.as_str())
                    .collect();
                write!(f, "{}", levels.join(", "))
            }
        }
    }
}
