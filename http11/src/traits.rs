use crate::types::FieldLine;

/// Operations shared by requests and responses: header lookup and
/// serialization to canonical wire bytes.
pub trait HttpMessage {
    fn field_lines(&self) -> &[FieldLine];

    fn message_body(&self) -> &[u8];

    /// Writes the start line without its terminating CRLF.
    fn write_start_line(&self, buf: &mut Vec<u8>);

    /// Value of the first field line whose name equals `name` byte for byte.
    ///
    /// Names are compared case-sensitively and later duplicates are ignored.
    fn get_header(&self, name: &[u8]) -> Option<&[u8]> {
        self.field_lines()
            .iter()
            .find(|field_line| field_line.name == name)
            .map(|field_line| field_line.value.as_slice())
    }

    /// Every value whose field name equals `name`, in arrival order.
    fn header_values<'a>(&'a self, name: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + 'a {
        self.field_lines()
            .iter()
            .filter(move |field_line| field_line.name == name)
            .map(|field_line| field_line.value.as_slice())
    }

    /// Appends the canonical form: one SP after every colon, no other OWS.
    fn write_to(&self, buf: &mut Vec<u8>) {
        self.write_start_line(buf);
        buf.extend_from_slice(b"\r\n");
        for field_line in self.field_lines() {
            buf.extend_from_slice(&field_line.name);
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(&field_line.value);
            buf.extend_from_slice(b"\r\n");
        }
        buf.extend_from_slice(b"\r\n");
        buf.extend_from_slice(self.message_body());
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_to(&mut buf);
        buf
    }
}
