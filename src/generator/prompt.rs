use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of infrastructure artifact the generator is asked for
///
/// The named variants are the ones offered by the interactive menu. Any
/// other non-empty tag is carried through to the prompt unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InfraType {
    #[default]
    Docker,
    K8s,
    Terraform,
    Bash,
    Other(String),
}

impl InfraType {
    /// Menu entries, in the order the interactive menu lists them
    pub const ALL: [InfraType; 4] = [
        InfraType::Docker,
        InfraType::K8s,
        InfraType::Terraform,
        InfraType::Bash,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            InfraType::Docker => "docker",
            InfraType::K8s => "k8s",
            InfraType::Terraform => "terraform",
            InfraType::Bash => "bash",
            InfraType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for InfraType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InfraType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        match tag.to_lowercase().as_str() {
            "" => Err("Infrastructure type must not be empty".to_string()),
            "docker" => Ok(InfraType::Docker),
            "k8s" | "kubernetes" => Ok(InfraType::K8s),
            "terraform" => Ok(InfraType::Terraform),
            "bash" => Ok(InfraType::Bash),
            _ => Ok(InfraType::Other(tag.to_string())),
        }
    }
}

impl TryFrom<String> for InfraType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InfraType> for String {
    fn from(value: InfraType) -> Self {
        match value {
            InfraType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// Build the natural-language prompt handed to the generator
pub fn build_prompt(instruction: &str, infra_type: &InfraType) -> String {
    format!("Create a {} file that does: {}", infra_type, instruction)
}
