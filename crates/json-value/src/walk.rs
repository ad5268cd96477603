//! Depth-first traversal and path lookup.
//!
//! Mutating a tree from inside a visitor is not supported; the visitor only
//! receives shared references.

use crate::path::{Key, Path};
use crate::value::Value;

/// Visits every node of `root` in pre-order, starting with the root at the
/// empty path.
///
/// Object members are visited in their stored order, array elements by
/// ascending index. The first error returned by `visitor` stops the walk and
/// is returned unchanged.
///
/// # Example
///
/// ```
/// use json_value::{walk, Value};
///
/// let doc = Value::object([("a", Value::null()), ("b", Value::array([Value::null()]))]);
/// let mut visited = Vec::new();
/// walk(&doc, |path, _| {
///     visited.push(path.to_string());
///     Ok::<_, ()>(())
/// })
/// .unwrap();
/// assert_eq!(visited, ["", "/a", "/b", "/b/0"]);
/// ```
pub fn walk<'a, E, F>(root: &'a Value, mut visitor: F) -> Result<(), E>
where
    F: FnMut(&Path, &'a Value) -> Result<(), E>,
{
    let mut path = Path::new();
    walk_impl(&mut path, root, &mut visitor)
}

fn walk_impl<'a, E, F>(path: &mut Path, value: &'a Value, visitor: &mut F) -> Result<(), E>
where
    F: FnMut(&Path, &'a Value) -> Result<(), E>,
{
    if let Err(err) = visitor(&*path, value) {
        tracing::trace!(path = %path, "walk stopped by visitor");
        return Err(err);
    }
    match value {
        Value::Object(props) => {
            for (key, child) in props {
                path.push(Key::from(key.as_str()));
                let result = walk_impl(path, child, visitor);
                path.pop();
                result?;
            }
        }
        Value::Array(elements) => {
            for (index, child) in elements.iter().enumerate() {
                path.push(Key::from_index(index));
                let result = walk_impl(path, child, visitor);
                path.pop();
                result?;
            }
        }
        Value::Null | Value::Boolean(_) | Value::Number(_) | Value::String(_) => {}
    }
    Ok(())
}

/// Looks up the node at `path` by walking `root`.
///
/// Returns the first node visited at a path equal to `path`, or `None`.
pub fn find<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    walk(root, |visited, value| {
        if visited == path {
            Err(value)
        } else {
            Ok(())
        }
    })
    .err()
}

impl Value {
    /// See [`walk`].
    pub fn walk<'a, E, F>(&'a self, visitor: F) -> Result<(), E>
    where
        F: FnMut(&Path, &'a Value) -> Result<(), E>,
    {
        walk(self, visitor)
    }

    /// See [`find`].
    pub fn find(&self, path: &Path) -> Option<&Value> {
        find(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Type;

    fn fixture() -> Value {
        Value::object([
            ("a", Value::null()),
            (
                "b",
                Value::object([
                    ("x", Value::null()),
                    ("y", Value::object([("w", Value::null())])),
                    ("z", Value::array([Value::null()])),
                ]),
            ),
            (
                "c",
                Value::array([
                    Value::null(),
                    Value::object([("w", Value::null())]),
                    Value::array([Value::null()]),
                ]),
            ),
        ])
    }

    fn visited_paths(value: &Value) -> Vec<Path> {
        let mut paths = Vec::new();
        walk(value, |path, _| {
            paths.push(path.clone());
            Ok::<_, ()>(())
        })
        .unwrap();
        paths
    }

    #[test]
    fn test_walk_error_stops() {
        let mut calls = 0;
        let result = walk(&fixture(), |_, _| {
            calls += 1;
            Err("stop")
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_walk_error_mid_tree() {
        let doc = fixture();
        let mut seen = Vec::new();
        let result = walk(&doc, |path, _| {
            seen.push(path.to_string());
            if path == &Path::from(["b", "y"]) {
                return Err(path.clone());
            }
            Ok(())
        });
        assert_eq!(result, Err(Path::from(["b", "y"])));
        assert_eq!(seen, ["", "/a", "/b", "/b/x", "/b/y"]);
    }

    #[test]
    fn test_walk_null() {
        assert_eq!(visited_paths(&Value::null()), vec![Path::new()]);
    }

    #[test]
    fn test_walk_object_pre_order() {
        let paths: Vec<String> = visited_paths(&fixture())
            .iter()
            .map(Path::to_string)
            .collect();
        assert_eq!(
            paths,
            [
                "", "/a", "/b", "/b/x", "/b/y", "/b/y/w", "/b/z", "/b/z/0", "/c", "/c/0", "/c/1",
                "/c/1/w", "/c/2", "/c/2/0",
            ]
        );
    }

    #[test]
    fn test_walk_array() {
        let doc = Value::array([
            Value::null(),
            fixture().object_get_elm("b").clone(),
            fixture().object_get_elm("c").clone(),
        ]);
        assert_eq!(visited_paths(&doc).len(), 14);
    }

    #[test]
    fn test_find_not_found() {
        let path = Path::from(["xxx"]);
        assert!(find(&Value::null(), &path).is_none());
        assert!(find(&fixture(), &path).is_none());
        assert!(find(&fixture(), &Path::from(["c", "9"])).is_none());
        assert!(find(&fixture(), &Path::from(["a", "x"])).is_none());
    }

    #[test]
    fn test_find() {
        let doc = fixture();
        let cases = [
            (vec![], Type::Object),
            (vec!["a"], Type::Null),
            (vec!["b"], Type::Object),
            (vec!["b", "x"], Type::Null),
            (vec!["b", "y"], Type::Object),
            (vec!["b", "y", "w"], Type::Null),
            (vec!["b", "z"], Type::Array),
            (vec!["b", "z", "0"], Type::Null),
            (vec!["c"], Type::Array),
            (vec!["c", "0"], Type::Null),
            (vec!["c", "1"], Type::Object),
            (vec!["c", "1", "w"], Type::Null),
            (vec!["c", "2"], Type::Array),
            (vec!["c", "2", "0"], Type::Null),
        ];
        for (keys, ty) in cases {
            let path = Path::from(keys);
            let found = doc.find(&path);
            assert_eq!(found.map(Value::value_type), Some(ty), "path {path}");
        }
    }

    #[test]
    fn test_find_returns_node_reference() {
        let doc = Value::array([Value::null(), Value::object([("w", Value::number(5))])]);
        let found = find(&doc, &Path::from(["1", "w"])).unwrap();
        assert!(std::ptr::eq(found, doc.array_get_elm(1).object_get_elm("w")));
        assert!(find(&doc, &Path::from(["9"])).is_none());
    }
}
