use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type BlockId = String;

/// Literal type codes used inside serialized inputs, e.g. `[4, "10"]`
const LITERAL_TEXT: u64 = 10;
const LITERAL_COLOR: u64 = 9;
const LITERAL_BROADCAST: u64 = 11;
const LITERAL_VARIABLE: u64 = 12;
const LITERAL_LIST: u64 = 13;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub opcode: String,
    #[serde(default)]
    pub next: Option<BlockId>,
    #[serde(default)]
    pub parent: Option<BlockId>,
    #[serde(default)]
    pub inputs: Map<String, Value>,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default)]
    pub shadow: bool,
    #[serde(default)]
    pub top_level: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation: Option<Map<String, Value>>,
}

/// What an input slot currently holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValue<'b> {
    /// Another block (reporter, boolean or menu shadow) plugged into the slot
    Block(&'b str),
    Number(String),
    Text(String),
    Variable(String),
    Empty,
}

impl Block {
    pub fn new(opcode: &str) -> Self {
        Block {
            opcode: opcode.to_string(),
            next: None,
            parent: None,
            inputs: Map::new(),
            fields: Map::new(),
            shadow: false,
            top_level: false,
            mutation: None,
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_menu(&self) -> bool {
        self.opcode.ends_with("_menu")
    }

    /// Resolve an input slot.
    ///
    /// Inputs are serialized as `[shadow_kind, value, (obscured shadow)]` where
    /// `value` is either a block id, a literal array `[type, value, ..]` or null.
    pub fn input(&self, name: &str) -> InputValue<'_> {
        let Some(slot) = self.inputs.get(name).and_then(|input| input.get(1)) else {
            return InputValue::Empty;
        };

        match slot {
            Value::String(id) => InputValue::Block(id.as_str()),
            Value::Array(literal) => Self::literal(literal),
            _ => InputValue::Empty,
        }
    }

    pub fn has_input(&self, name: &str) -> bool {
        self.inputs.contains_key(name)
    }

    /// Block id of a nested stack (`SUBSTACK`, `SUBSTACK2`), if the slot is filled
    pub fn substack(&self, name: &str) -> Option<&str> {
        match self.input(name) {
            InputValue::Block(id) => Some(id),
            _ => None,
        }
    }

    /// First element of a field entry, `["value", id]`
    pub fn field(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .and_then(|field| field.get(0))
            .and_then(scalar_to_string)
    }

    pub fn first_field(&self) -> Option<String> {
        self.fields
            .values()
            .next()
            .and_then(|field| field.get(0))
            .and_then(scalar_to_string)
    }

    pub fn mutation_str(&self, key: &str) -> Option<&str> {
        self.mutation
            .as_ref()
            .and_then(|mutation| mutation.get(key))
            .and_then(Value::as_str)
    }

    fn literal(literal: &[Value]) -> InputValue<'static> {
        let kind = literal.first().and_then(Value::as_u64).unwrap_or_default();
        let Some(value) = literal.get(1).and_then(scalar_to_string) else {
            return InputValue::Empty;
        };

        match kind {
            LITERAL_TEXT | LITERAL_COLOR | LITERAL_BROADCAST => InputValue::Text(value),
            LITERAL_VARIABLE | LITERAL_LIST => InputValue::Variable(value),
            _ => InputValue::Number(value),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
