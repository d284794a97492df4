/// Loader for the JSON case table
use serde::Deserialize;

const CASES_JSON: &str = include_str!("qurl_cases.json");

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum FixtureCase {
    /// One base URL + token list
    Case {
        input: String,
        #[serde(default)]
        tokens: Vec<String>,
        /// Expected serialized URL on success
        #[serde(default)]
        output: Option<String>,
        /// "grammar" or "url" when the call must fail
        #[serde(default)]
        failure: Option<String>,
    },
    /// A section heading (string)
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub case_num: usize,
    pub input: String,
    pub tokens: Vec<String>,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl FixtureResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_failure(&mut self, case_num: usize, input: &str, tokens: &[String], actual: String) {
        self.failures.push(FixtureFailure {
            case_num,
            input: input.to_string(),
            tokens: tokens.to_vec(),
            actual,
        });
    }

    pub fn summary(&self) -> String {
        let mut out = format!("Passed: {}, Failed: {}", self.passed, self.failures.len());
        for failure in &self.failures {
            out.push_str(&format!(
                "\n  #{} {} {:?} -> {}",
                failure.case_num, failure.input, failure.tokens, failure.actual
            ));
        }
        out
    }
}

pub fn load_cases() -> Vec<FixtureCase> {
    serde_json::from_str(CASES_JSON).unwrap_or_else(|err| panic!("invalid qurl_cases.json: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let cases = load_cases();
        assert!(cases.iter().any(|c| matches!(c, FixtureCase::Comment(_))));
        assert!(cases.iter().any(|c| matches!(c, FixtureCase::Case { .. })));
    }
}
