use crate::{
    error::EncodeError,
    serialize::SerializationWriter,
    value::{Object, Value},
};

///
/// Frame
/// One open object or collection, remembered with the key it will be
/// attached under when closed.
///

#[derive(Debug)]
enum Frame {
    Collection(Option<String>, Vec<Value>),
    Object(Option<String>, Object),
}

///
/// ValueWriter
///
/// `SerializationWriter` that builds an untyped `Value` tree.
/// Rejects duplicate object keys, non-finite numbers and unbalanced
/// start/end calls.
///

#[derive(Debug, Default)]
pub struct ValueWriter {
    frames: Vec<Frame>,
    root: Option<Value>,
}

impl ValueWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frames: Vec::new(),
            root: None,
        }
    }

    /// Finish writing and return the document root.
    pub fn into_value(self) -> Result<Value, EncodeError> {
        if !self.frames.is_empty() {
            return Err(EncodeError::invalid_state(
                "document ended with an unclosed object or collection",
            ));
        }

        self.root
            .ok_or_else(|| EncodeError::invalid_state("nothing was written"))
    }

    // Validate that `key` may be written at the current position.
    fn check_slot(&self, key: Option<&str>) -> Result<(), EncodeError> {
        match (self.frames.last(), key) {
            (None, None) if self.root.is_none() => Ok(()),
            (None, None) => Err(EncodeError::invalid_state("document root already written")),
            (None, Some(_)) => Err(EncodeError::invalid_state("keyed write at document root")),
            (Some(Frame::Object(_, members)), Some(key)) => {
                if members.contains_key(key) {
                    Err(EncodeError::DuplicateKey {
                        key: key.to_string(),
                    })
                } else {
                    Ok(())
                }
            }
            (Some(Frame::Object(..)), None) => {
                Err(EncodeError::invalid_state("object member written without a key"))
            }
            (Some(Frame::Collection(..)), Some(_)) => Err(EncodeError::invalid_state(
                "keyed write inside a collection",
            )),
            (Some(Frame::Collection(..)), None) => Ok(()),
        }
    }

    fn put(&mut self, key: Option<&str>, value: Value) -> Result<(), EncodeError> {
        self.check_slot(key)?;

        match self.frames.last_mut() {
            None => self.root = Some(value),
            Some(Frame::Object(_, members)) => {
                if let Some(key) = key {
                    members.insert(key.to_string(), value);
                }
            }
            Some(Frame::Collection(_, items)) => items.push(value),
        }

        Ok(())
    }
}

impl SerializationWriter for ValueWriter {
    fn write_null(&mut self, key: Option<&str>) -> Result<(), EncodeError> {
        self.put(key, Value::Null)
    }

    fn write_bool(&mut self, key: Option<&str>, value: bool) -> Result<(), EncodeError> {
        self.put(key, Value::Bool(value))
    }

    fn write_i64(&mut self, key: Option<&str>, value: i64) -> Result<(), EncodeError> {
        self.put(key, Value::Int(value))
    }

    fn write_u64(&mut self, key: Option<&str>, value: u64) -> Result<(), EncodeError> {
        self.put(key, Value::from(value))
    }

    fn write_f64(&mut self, key: Option<&str>, value: f64) -> Result<(), EncodeError> {
        if !value.is_finite() {
            return Err(EncodeError::NonFiniteNumber);
        }

        self.put(key, Value::Float(value))
    }

    fn write_str(&mut self, key: Option<&str>, value: &str) -> Result<(), EncodeError> {
        self.put(key, Value::Text(value.to_string()))
    }

    fn start_object(&mut self, key: Option<&str>) -> Result<(), EncodeError> {
        self.check_slot(key)?;
        self.frames
            .push(Frame::Object(key.map(str::to_string), Object::new()));

        Ok(())
    }

    fn end_object(&mut self) -> Result<(), EncodeError> {
        match self.frames.pop() {
            Some(Frame::Object(key, members)) => self.put(key.as_deref(), Value::Object(members)),
            Some(frame @ Frame::Collection(..)) => {
                self.frames.push(frame);
                Err(EncodeError::invalid_state(
                    "end_object called while a collection is open",
                ))
            }
            None => Err(EncodeError::invalid_state(
                "end_object called without start_object",
            )),
        }
    }

    fn start_collection(&mut self, key: Option<&str>) -> Result<(), EncodeError> {
        self.check_slot(key)?;
        self.frames
            .push(Frame::Collection(key.map(str::to_string), Vec::new()));

        Ok(())
    }

    fn end_collection(&mut self) -> Result<(), EncodeError> {
        match self.frames.pop() {
            Some(Frame::Collection(key, items)) => self.put(key.as_deref(), Value::List(items)),
            Some(frame @ Frame::Object(..)) => {
                self.frames.push(frame);
                Err(EncodeError::invalid_state(
                    "end_collection called while an object is open",
                ))
            }
            None => Err(EncodeError::invalid_state(
                "end_collection called without start_collection",
            )),
        }
    }
}
