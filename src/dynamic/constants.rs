/// Tag of [`Value::None`](crate::value::Value::None), 0x00
pub(crate) const TAG_NONE: u8 = 0;
/// Tag of [`Value::Boolean`](crate::value::Value::Boolean), 0x01
pub(crate) const TAG_BOOLEAN: u8 = 1;
/// Tag of [`Value::Int64`](crate::value::Value::Int64), 0x02
pub(crate) const TAG_INT64: u8 = 2;
/// Tag of [`Value::String`](crate::value::Value::String), 0x03
pub(crate) const TAG_STRING: u8 = 3;
/// Tag of [`Value::Dictionary`](crate::value::Value::Dictionary), 0x04
pub(crate) const TAG_DICTIONARY: u8 = 4;
/// Tag of [`Value::List`](crate::value::Value::List), 0x05
pub(crate) const TAG_LIST: u8 = 5;

/// Width of a string or key length.
pub(crate) const STRING_LEN_BYTES: usize = 4;
/// Width of a list or dictionary count.
pub(crate) const COUNT_BYTES: usize = 8;
