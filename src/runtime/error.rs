use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error(
        "Invalid heap configuration: limit {}{}.",
        limit,
        HeapError::format_msg_as_detail(msg)
    )]
    InvalidConfiguration { limit: i64, msg: Option<String> },

    #[error("Unknown heap policy '{name}'. Expected one of: min, max, random.")]
    UnknownPolicy { name: String },

    #[error("Aggregator contract violated{}", HeapError::format_msg_as_detail(msg))]
    ContractViolation { msg: Option<String> },
}

impl HeapError {
    #[cold]
    pub fn invalid_configuration<L: TryInto<i64>, M: Into<String>>(
        limit: L,
        msg: Option<M>,
    ) -> Self {
        HeapError::InvalidConfiguration {
            limit: limit.try_into().unwrap_or(i64::MAX),
            msg: msg.map(|m| m.into()),
        }
    }

    #[cold]
    pub fn unknown_policy<N: Into<String>>(name: N) -> Self {
        HeapError::UnknownPolicy { name: name.into() }
    }

    #[cold]
    pub fn contract_violation<M: Into<String>>(msg: Option<M>) -> Self {
        HeapError::ContractViolation {
            msg: msg.map(|m| m.into()),
        }
    }

    pub fn format_msg_as_detail(msg: &Option<String>) -> String {
        match msg {
            Some(m) => format!(" ({})", m),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = HeapError::invalid_configuration(0usize, Some("must be positive"));
        assert_eq!(
            e.to_string(),
            "Invalid heap configuration: limit 0 (must be positive)."
        );

        let e = HeapError::unknown_policy("median");
        assert!(e.to_string().contains("'median'"));

        let e = HeapError::contract_violation::<String>(None);
        assert_eq!(e.to_string(), "Aggregator contract violated");
    }
}
