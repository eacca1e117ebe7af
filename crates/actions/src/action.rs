use serde::{Deserialize, Serialize};

/// Integer code identifying what an action does. [`ActionCode::NO_OP`] marks
/// a placeholder entry that renders but performs nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionCode(pub i32);

impl ActionCode {
    pub const NO_OP: ActionCode = ActionCode(-1);

    pub fn is_no_op(self) -> bool {
        self == Self::NO_OP
    }
}

/// One entry of an item's ordered action set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub code: ActionCode,

    /// Key into the consumer's localization resources.
    pub resource_key: String,

    /// Optional argument substituted into the resolved label.
    pub arg: Option<String>,
}

impl Action {
    pub fn new(code: ActionCode, resource_key: impl Into<String>) -> Self {
        Self {
            code,
            resource_key: resource_key.into(),
            arg: None,
        }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = Some(arg.into());
        self
    }

    /// Fills a resolved label template: every `%s` becomes the action's
    /// argument when one is present; without an argument the template is
    /// used verbatim.
    pub fn render_label(&self, template: &str) -> String {
        match &self.arg {
            Some(arg) => template.replace("%s", arg),
            None => template.to_string(),
        }
    }
}
