/// A single `field-name ":" field-value` pair, with surrounding OWS removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldLine {
    pub name: Vec<u8>,
    pub value: Vec<u8>,
}

impl FieldLine {
    pub fn new(name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
