use crate::artifacts::remote::CODAT_ID_REGEX;
use crate::errors::CodatError;
use anyhow::Context;

const LINK_SEGMENT: &str = "/codat/";

/// Link to a codat hosted by the remote content service
///
/// Only links of the form `<remote>/codat/<id>` pointing at the configured
/// remote are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodatLink {
    remote: String,
    id: String,
}

impl CodatLink {
    pub fn try_parse(link: &str, remote_url: &str) -> anyhow::Result<Self> {
        let link = link.trim();
        let prefix = format!("{}{}", remote_url.trim_end_matches('/'), LINK_SEGMENT);

        let id = link
            .strip_prefix(&prefix)
            .map(|id| id.trim_end_matches('/'))
            .ok_or_else(|| CodatError::InvalidLink(link.to_string()))?;

        let re = regex::Regex::new(CODAT_ID_REGEX)
            .with_context(|| format!("invalid codat id regex: {CODAT_ID_REGEX}"))?;

        if !re.is_match(id) {
            return Err(CodatError::InvalidLink(link.to_string()).into());
        }

        Ok(CodatLink {
            remote: remote_url.trim_end_matches('/').to_string(),
            id: id.to_string(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn clone_url(&self) -> String {
        format!("{}/api/codat/clone/{}", self.remote, self.id)
    }

    pub fn edit_url(&self) -> String {
        format!("{}/api/codat/edit/{}", self.remote, self.id)
    }
}

impl std::fmt::Display for CodatLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.remote, LINK_SEGMENT, self.id)
    }
}
