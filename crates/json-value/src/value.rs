//! The JSON document node.

use indexmap::IndexMap;

use crate::error::{check_range, contract, Error, Result};
use crate::number::Number;
use crate::types::Type;

/// Members of a JSON object, kept in insertion order.
pub type Props = IndexMap<String, Value>;

/// One node of a JSON document tree.
///
/// Containers own their children. [`Clone`] is a deep copy and `==` compares
/// structure; object member order does not take part in equality.
///
/// Every accessor and mutator is only valid for the matching [`Type`]. The
/// plain forms panic on misuse (wrong type, missing key, index out of range),
/// the `try_` forms return the [`Error`] instead.
///
/// # Example
///
/// ```
/// use json_value::{Type, Value};
///
/// let mut doc = Value::object([("name", Value::string("joy"))]);
/// doc.object_set_elm("tags", Value::array([Value::number(1), Value::boolean(true)]));
///
/// assert_eq!(doc.object_len(), 2);
/// assert_eq!(doc.object_get_elm("tags").array_len(), 2);
/// assert_eq!(doc.object_get_elm("name").value_type(), Type::String);
/// assert!(doc.try_array_len().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Props),
}

impl Value {
    /// Creates a JSON `null`.
    pub fn null() -> Self {
        Value::Null
    }

    /// Creates a JSON boolean.
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    /// Creates a JSON string.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Creates a number from an integer of any width or a [`Number`] literal.
    pub fn number(n: impl Into<Number>) -> Self {
        Value::Number(n.into())
    }

    /// Creates a number from a float, written with 16 fractional digits.
    ///
    /// # Panics
    ///
    /// Panics if `f` is NaN or infinite.
    #[track_caller]
    pub fn float(f: f64) -> Self {
        contract(Self::try_float(f))
    }

    /// Like [`Value::float`], returning [`Error::InvalidNumber`] for NaN and infinities.
    pub fn try_float(f: f64) -> Result<Self> {
        Number::try_from(f).map(Value::Number)
    }

    /// Creates an array holding `elements` in order.
    ///
    /// # Example
    ///
    /// ```
    /// use json_value::Value;
    ///
    /// let array = Value::array([Value::null(), Value::boolean(true)]);
    /// assert_eq!(array.array_len(), 2);
    /// assert_eq!(Value::array(Vec::new()).to_string(), "[]");
    /// ```
    pub fn array(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(elements.into_iter().collect())
    }

    /// Creates an object; on duplicate keys the later member wins.
    pub fn object<K: Into<String>>(members: impl IntoIterator<Item = (K, Value)>) -> Self {
        let mut props = Props::new();
        for (key, value) in members {
            props.insert(key.into(), value);
        }
        Value::Object(props)
    }

    /// Creates an object merging several property sets, later sets overwriting
    /// earlier ones.
    pub fn from_props(props: impl IntoIterator<Item = Props>) -> Self {
        Value::object(props.into_iter().flatten())
    }

    /// Returns which of the six JSON shapes this node holds.
    pub fn value_type(&self) -> Type {
        match self {
            Value::Null => Type::Null,
            Value::Boolean(_) => Type::Boolean,
            Value::Number(_) => Type::Number,
            Value::String(_) => Type::String,
            Value::Array(_) => Type::Array,
            Value::Object(_) => Type::Object,
        }
    }

    /// Whether this node is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this node is a boolean.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Whether this node is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Whether this node is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Whether this node is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Whether this node is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Reshapes this node in place into a copy of `other`.
    ///
    /// Children are owned by exactly one container, so the children of
    /// `other` are copied rather than shared. Use [`Value::assign_from`] to
    /// move a node in without copying.
    pub fn assign(&mut self, other: &Value) {
        self.clone_from(other);
    }

    /// Reshapes this node in place, taking ownership of `other`.
    pub fn assign_from(&mut self, other: Value) {
        *self = other;
    }

    fn mismatch(&self, expected: Type) -> Error {
        Error::TypeMismatch {
            expected,
            actual: self.value_type(),
        }
    }

    // Scalars

    /// Returns the number literal.
    ///
    /// # Panics
    ///
    /// Panics if this node is not a number.
    #[track_caller]
    pub fn number_get(&self) -> &Number {
        contract(self.try_number_get())
    }

    /// Like [`Value::number_get`], returning [`Error::TypeMismatch`] instead of panicking.
    pub fn try_number_get(&self) -> Result<&Number> {
        match self {
            Value::Number(n) => Ok(n),
            _ => Err(self.mismatch(Type::Number)),
        }
    }

    /// Returns the string content.
    ///
    /// # Panics
    ///
    /// Panics if this node is not a string.
    #[track_caller]
    pub fn string_get(&self) -> &str {
        contract(self.try_string_get())
    }

    /// Like [`Value::string_get`], returning [`Error::TypeMismatch`] instead of panicking.
    pub fn try_string_get(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(Type::String)),
        }
    }

    /// Returns the boolean.
    ///
    /// # Panics
    ///
    /// Panics if this node is not a boolean.
    #[track_caller]
    pub fn boolean_get(&self) -> bool {
        contract(self.try_boolean_get())
    }

    /// Like [`Value::boolean_get`], returning [`Error::TypeMismatch`] instead of panicking.
    pub fn try_boolean_get(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch(Type::Boolean)),
        }
    }

    // Objects

    fn as_object(&self) -> Result<&Props> {
        match self {
            Value::Object(props) => Ok(props),
            _ => Err(self.mismatch(Type::Object)),
        }
    }

    fn as_object_mut(&mut self) -> Result<&mut Props> {
        match self {
            Value::Object(props) => Ok(props),
            _ => Err(self.mismatch(Type::Object)),
        }
    }

    /// Returns the member names in insertion order.
    #[track_caller]
    pub fn object_keys(&self) -> Vec<&str> {
        contract(self.try_object_keys())
    }

    /// Like [`Value::object_keys`], returning [`Error::TypeMismatch`] instead of panicking.
    pub fn try_object_keys(&self) -> Result<Vec<&str>> {
        Ok(self.as_object()?.keys().map(String::as_str).collect())
    }

    /// Iterates over `(key, member)` pairs in insertion order.
    #[track_caller]
    pub fn object_iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        contract(self.as_object()).iter()
    }

    /// Whether the object has a member named `key`.
    #[track_caller]
    pub fn object_has_elm(&self, key: &str) -> bool {
        contract(self.try_object_has_elm(key))
    }

    /// Like [`Value::object_has_elm`], returning an error on non-objects.
    pub fn try_object_has_elm(&self, key: &str) -> Result<bool> {
        Ok(self.as_object()?.contains_key(key))
    }

    /// Returns the member named `key`.
    ///
    /// # Panics
    ///
    /// Panics if this node is not an object or has no such member.
    ///
    /// # Example
    ///
    /// ```
    /// use json_value::Value;
    ///
    /// let object = Value::object([("a", Value::number(1))]);
    /// assert_eq!(object.object_get_elm("a"), &Value::number(1));
    /// assert!(object.try_object_get_elm("b").is_err());
    /// ```
    #[track_caller]
    pub fn object_get_elm(&self, key: &str) -> &Value {
        contract(self.try_object_get_elm(key))
    }

    /// Like [`Value::object_get_elm`], returning [`Error::KeyNotFound`] for a missing member.
    pub fn try_object_get_elm(&self, key: &str) -> Result<&Value> {
        self.as_object()?
            .get(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// Returns the member named `key` for in-place mutation.
    #[track_caller]
    pub fn object_get_elm_mut(&mut self, key: &str) -> &mut Value {
        contract(self.try_object_get_elm_mut(key))
    }

    /// Like [`Value::object_get_elm_mut`], returning an error instead of panicking.
    pub fn try_object_get_elm_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.as_object_mut()?
            .get_mut(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// Inserts or overwrites a member; an overwritten member keeps its position.
    #[track_caller]
    pub fn object_set_elm(&mut self, key: impl Into<String>, value: Value) {
        contract(self.try_object_set_elm(key, value))
    }

    /// Like [`Value::object_set_elm`], returning an error on non-objects.
    pub fn try_object_set_elm(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        self.as_object_mut()?.insert(key.into(), value);
        Ok(())
    }

    /// Removes a member, returning it. Removing an absent key does nothing.
    #[track_caller]
    pub fn object_del_elm(&mut self, key: &str) -> Option<Value> {
        contract(self.try_object_del_elm(key))
    }

    /// Like [`Value::object_del_elm`], returning an error on non-objects.
    pub fn try_object_del_elm(&mut self, key: &str) -> Result<Option<Value>> {
        Ok(self.as_object_mut()?.shift_remove(key))
    }

    /// Returns the number of members.
    #[track_caller]
    pub fn object_len(&self) -> usize {
        contract(self.try_object_len())
    }

    /// Like [`Value::object_len`], returning an error on non-objects.
    pub fn try_object_len(&self) -> Result<usize> {
        Ok(self.as_object()?.len())
    }

    // Arrays

    fn as_array(&self) -> Result<&Vec<Value>> {
        match self {
            Value::Array(elements) => Ok(elements),
            _ => Err(self.mismatch(Type::Array)),
        }
    }

    fn as_array_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(elements) => Ok(elements),
            _ => Err(self.mismatch(Type::Array)),
        }
    }

    /// Iterates over the elements in index order.
    #[track_caller]
    pub fn array_iter(&self) -> std::slice::Iter<'_, Value> {
        contract(self.as_array()).iter()
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if this node is not an array or `index >= len`.
    #[track_caller]
    pub fn array_get_elm(&self, index: usize) -> &Value {
        contract(self.try_array_get_elm(index))
    }

    /// Like [`Value::array_get_elm`], returning [`Error::IndexOutOfRange`] for a bad index.
    pub fn try_array_get_elm(&self, index: usize) -> Result<&Value> {
        let elements = self.as_array()?;
        elements.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: elements.len(),
        })
    }

    /// Returns the element at `index` for in-place mutation.
    #[track_caller]
    pub fn array_get_elm_mut(&mut self, index: usize) -> &mut Value {
        contract(self.try_array_get_elm_mut(index))
    }

    /// Like [`Value::array_get_elm_mut`], returning an error instead of panicking.
    pub fn try_array_get_elm_mut(&mut self, index: usize) -> Result<&mut Value> {
        let elements = self.as_array_mut()?;
        let len = elements.len();
        elements
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Replaces the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if this node is not an array or `index >= len`.
    #[track_caller]
    pub fn array_set_elm(&mut self, index: usize, value: Value) {
        contract(self.try_array_set_elm(index, value))
    }

    /// Like [`Value::array_set_elm`], returning an error instead of panicking.
    pub fn try_array_set_elm(&mut self, index: usize, value: Value) -> Result<()> {
        *self.try_array_get_elm_mut(index)? = value;
        Ok(())
    }

    /// Appends elements in argument order.
    #[track_caller]
    pub fn array_add_elm(&mut self, values: impl IntoIterator<Item = Value>) {
        contract(self.try_array_add_elm(values))
    }

    /// Like [`Value::array_add_elm`], returning an error on non-arrays.
    pub fn try_array_add_elm(&mut self, values: impl IntoIterator<Item = Value>) -> Result<()> {
        self.as_array_mut()?.extend(values);
        Ok(())
    }

    /// Returns the number of elements.
    #[track_caller]
    pub fn array_len(&self) -> usize {
        contract(self.try_array_len())
    }

    /// Like [`Value::array_len`], returning an error on non-arrays.
    pub fn try_array_len(&self) -> Result<usize> {
        Ok(self.as_array()?.len())
    }

    /// Returns a new array holding copies of the elements in `begin..end`.
    ///
    /// # Panics
    ///
    /// Panics unless `begin <= end <= len`.
    #[track_caller]
    pub fn array_slice(&self, begin: usize, end: usize) -> Value {
        contract(self.try_array_slice(begin, end))
    }

    /// Like [`Value::array_slice`], returning [`Error::InvalidArgument`] for bad bounds.
    pub fn try_array_slice(&self, begin: usize, end: usize) -> Result<Value> {
        let elements = self.as_array()?;
        check_range(begin, end, elements.len())?;
        Ok(Value::Array(elements[begin..end].to_vec()))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Array(elements)
    }
}

impl From<Props> for Value {
    fn from(props: Props) -> Self {
        Value::Object(props)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<f64> for Value {
    type Error = Error;

    fn try_from(f: f64) -> Result<Self> {
        Value::try_float(f)
    }
}

impl TryFrom<f32> for Value {
    type Error = Error;

    fn try_from(f: f32) -> Result<Self> {
        Number::try_from(f).map(Value::Number)
    }
}
