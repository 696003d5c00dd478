#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[macro_export]
/// Create a [`RandomMap`][crate::RandomMap] from a list of key-value pairs
///
/// ## Example
///
/// ```
/// use randmap::randmap;
///
/// let map = randmap!{
///     "a" => 1,
///     "b" => 2,
/// };
/// assert_eq!(map["a"], 1);
/// assert_eq!(map["b"], 2);
/// assert_eq!(map.get("c"), None);
///
/// // a later duplicate key overwrites the earlier value
/// let map = randmap!{ "a" => 1, "a" => 3 };
/// assert_eq!(map.len(), 1);
/// assert_eq!(map["a"], 3);
/// ```
macro_rules! randmap {
    ($($key:expr => $value:expr,)+) => { $crate::randmap!($($key => $value),+) };
    ($($key:expr => $value:expr),*) => {
        {
            // Note: `stringify!($key)` is just here to consume the repetition,
            // but we throw away that string literal during constant evaluation.
            const CAP: usize = <[()]>::len(&[$({ stringify!($key); }),*]);
            let mut map = $crate::RandomMap::with_capacity(CAP);
            $(
                map.insert($key, $value);
            )*
            map
        }
    };
}

// Implement the iterator traits for a type whose `slots` field walks the
// buckets in slot order, turning each one into an item with `$project`.
macro_rules! slot_iterator {
    ($name:ident<$($lt:lifetime,)? K, V>, $item:ty, $project:expr) => {
        impl<$($lt,)? K, V> Iterator for $name<$($lt,)? K, V> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.slots.next().map($project)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.slots.size_hint()
            }

            fn nth(&mut self, n: usize) -> Option<Self::Item> {
                self.slots.nth(n).map($project)
            }
        }

        impl<$($lt,)? K, V> DoubleEndedIterator for $name<$($lt,)? K, V> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.slots.next_back().map($project)
            }
        }

        impl<$($lt,)? K, V> ExactSizeIterator for $name<$($lt,)? K, V> {
            fn len(&self) -> usize {
                self.slots.len()
            }
        }

        impl<$($lt,)? K, V> FusedIterator for $name<$($lt,)? K, V> {}
    };
}
