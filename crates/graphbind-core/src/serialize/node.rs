use crate::{
    serialize::ParseNode,
    value::{Value, ValueTag},
};

impl ParseNode for Value {
    fn tag(&self) -> ValueTag {
        Self::tag(self)
    }

    fn child_node(&self, key: &str) -> Option<&dyn ParseNode> {
        self.get(key).map(|v| v as &dyn ParseNode)
    }

    fn object_entries(&self) -> Option<Box<dyn Iterator<Item = (&str, &dyn ParseNode)> + '_>> {
        let members = self.as_object()?;

        Some(Box::new(
            members
                .iter()
                .map(|(k, v)| (k.as_str(), v as &dyn ParseNode)),
        ))
    }

    fn collection_nodes(&self) -> Option<Box<dyn Iterator<Item = &dyn ParseNode> + '_>> {
        let items = self.as_list()?;

        Some(Box::new(items.iter().map(|v| v as &dyn ParseNode)))
    }

    fn as_bool(&self) -> Option<bool> {
        Self::as_bool(self)
    }

    fn as_i64(&self) -> Option<i64> {
        Self::as_i64(self)
    }

    fn as_f64(&self) -> Option<f64> {
        Self::as_f64(self)
    }

    fn as_str(&self) -> Option<&str> {
        self.as_text()
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ParseNode for serde_json::Value {
    fn tag(&self) -> ValueTag {
        match self {
            Self::Null => ValueTag::Null,
            Self::Bool(_) => ValueTag::Bool,
            Self::Number(n) if n.is_i64() => ValueTag::Int,
            Self::Number(n) if n.is_u64() => ValueTag::Uint,
            Self::Number(_) => ValueTag::Float,
            Self::String(_) => ValueTag::Text,
            Self::Array(_) => ValueTag::List,
            Self::Object(_) => ValueTag::Object,
        }
    }

    fn child_node(&self, key: &str) -> Option<&dyn ParseNode> {
        self.get(key).map(|v| v as &dyn ParseNode)
    }

    fn object_entries(&self) -> Option<Box<dyn Iterator<Item = (&str, &dyn ParseNode)> + '_>> {
        let members = self.as_object()?;

        Some(Box::new(
            members
                .iter()
                .map(|(k, v)| (k.as_str(), v as &dyn ParseNode)),
        ))
    }

    fn collection_nodes(&self) -> Option<Box<dyn Iterator<Item = &dyn ParseNode> + '_>> {
        let items = self.as_array()?;

        Some(Box::new(items.iter().map(|v| v as &dyn ParseNode)))
    }

    fn as_bool(&self) -> Option<bool> {
        Self::as_bool(self)
    }

    fn as_i64(&self) -> Option<i64> {
        Self::as_i64(self)
    }

    fn as_f64(&self) -> Option<f64> {
        Self::as_f64(self)
    }

    fn as_str(&self) -> Option<&str> {
        Self::as_str(self)
    }

    fn to_value(&self) -> Value {
        Value::from(self.clone())
    }
}
