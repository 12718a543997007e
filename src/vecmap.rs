//! A wrapper around a sorted vector of tuples that backs [`Dictionary`](crate::value::Dictionary).
//!
//! Keys are kept sorted and unique, so two maps with the same entries are equal no
//! matter the order the entries were inserted or decoded in. When a key shows up more
//! than once while building a map, the last occurrence wins.
//!
//! # Example
//!
//! ```
//! use std::collections::{BTreeMap, HashMap};
//! use vellum::prelude::*;
//!
//! let key = "a".to_string();
//! let value = 1;
//!
//! // from a `BTreeMap`
//! let mut btmap = BTreeMap::new();
//! btmap.insert(key.clone(), value);
//!
//! let bt_vm = VecMap::from(btmap);
//!
//! // from a `HashMap`
//! let mut hashmap = HashMap::new();
//! hashmap.insert(key.clone(), value);
//!
//! let hm_vm = VecMap::from(hashmap);
//! assert_eq!(bt_vm, hm_vm);
//!
//! // from a vector of tuples, where later duplicates replace earlier ones
//! let vec_vm = VecMap::from(vec![(key.clone(), 0), (key.clone(), value)]);
//! assert_eq!(vec_vm, bt_vm);
//! ```

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::*,
    iter::FromIterator,
    slice::Iter,
    vec::IntoIter,
};

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug)]
/// A map implemented as a sorted [`Vec`] of pairs.
///
/// See also: [module level documentation](`crate::vecmap`).
pub struct VecMap<K: Ord, V>(Vec<(K, V)>);

impl<K: Ord, V> Default for VecMap<K, V> {
    fn default() -> Self { VecMap(Vec::new()) }
}

impl<K: Ord, V> VecMap<K, V> {
    /// Creates an empty [`VecMap`].
    pub fn new() -> Self { Self::default() }

    /// Creates a [`VecMap`] from a vector of key-value pairs sorted by their first
    /// elements.
    ///
    /// # Arguments
    ///
    /// * `v: Vec<(K, V)>` - A vector of key-value pairs sorted by their first element.
    ///
    /// # Example
    ///
    /// ```
    /// use vellum::prelude::*;
    ///
    /// let vmap = VecMap::from_sorted(vec![(1, "foo"), (2, "bar"), (3, "baz")]);
    /// ```
    ///
    /// # Panics
    ///
    /// This function will panic if `v` is not strictly sorted by its first element, which
    /// includes repeated keys:
    ///
    /// ```should_panic
    /// use vellum::prelude::*;
    ///
    /// let vmap = VecMap::from_sorted(vec![("a", ""), ("a", "")]);
    /// ```
    pub fn from_sorted(v: Vec<(K, V)>) -> Self {
        for i in 1..v.len() {
            if v[i - 1].0 >= v[i].0 {
                panic!("`Vec` is not sorted by key")
            }
        }
        VecMap(v)
    }

    /// Returns the number of entries.
    ///
    /// # Example
    ///
    /// ```
    /// use vellum::prelude::*;
    ///
    /// let vmap = VecMap::from_sorted(vec![("foo", "bar")]);
    ///
    /// assert_eq!(vmap.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.0.len() }

    /// Indicates whether the [`VecMap`] is empty.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns an [`Iter`] of the key value pairs, in key order.
    ///
    /// # Example
    ///
    /// ```
    /// use vellum::prelude::*;
    ///
    /// let vmap = VecMap::from(vec![(3, "baz"), (1, "foo"), (2, "bar")]);
    ///
    /// let (k, v) = vmap.iter().next().unwrap();
    /// assert_eq!((k, v), (&1, &"foo"))
    /// ```
    pub fn iter(&self) -> Iter<(K, V)> { self.0.iter() }

    /// Keys, in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> { self.0.iter().map(|(k, _)| k) }

    /// Values, in key order.
    pub fn values(&self) -> impl Iterator<Item = &V> { self.0.iter().map(|(_, v)| v) }

    fn position<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.0.binary_search_by(|(k, _)| k.borrow().cmp(key))
    }

    /// Looks up the value stored under `key`.
    ///
    /// # Example
    ///
    /// ```
    /// use vellum::prelude::*;
    ///
    /// let vmap = VecMap::from(vec![("b".to_string(), 2), ("a".to_string(), 1)]);
    ///
    /// assert_eq!(vmap.get("a"), Some(&1));
    /// assert_eq!(vmap.get("c"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position(key).ok().map(|i| &self.0[i].1)
    }

    /// Mutable access to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.position(key) {
            Ok(i) => Some(&mut self.0[i].1),
            Err(_) => None,
        }
    }

    /// Whether there is an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position(key).is_ok()
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    ///
    /// # Example
    ///
    /// ```
    /// use vellum::prelude::*;
    ///
    /// let mut vmap = VecMap::new();
    ///
    /// assert_eq!(vmap.insert("k", 1), None);
    /// assert_eq!(vmap.insert("k", 2), Some(1));
    /// assert_eq!(vmap.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Ok(i) => Some(std::mem::replace(&mut self.0[i].1, value)),
            Err(i) => {
                self.0.insert(i, (key, value));
                None
            }
        }
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.position(key) {
            Ok(i) => Some(self.0.remove(i).1),
            Err(_) => None,
        }
    }
}

impl<K: Ord + Hash, V> VecMap<K, V> {
    /// Consumes a [`VecMap`], producing a [`HashMap`] from the entries.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use vellum::prelude::*;
    ///
    /// let vmap = VecMap::from_sorted(vec![(1, "foo"), (2, "bar"), (3, "baz")]);
    ///
    /// let hmap: HashMap<u8, &str> = vmap.into_hashmap();
    /// ```
    pub fn into_hashmap<S: BuildHasher + Default>(self) -> HashMap<K, V, S> {
        self.into_iter().collect()
    }
}

impl<K: Ord, V> From<Vec<(K, V)>> for VecMap<K, V> {
    fn from(mut v: Vec<(K, V)>) -> Self {
        // stable, so repeated keys stay in arrival order and the last one is kept
        v.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
        let mut out: Vec<(K, V)> = Vec::with_capacity(v.len());
        for (k, val) in v {
            match out.last_mut() {
                Some(last) if last.0 == k => last.1 = val,
                _ => out.push((k, val)),
            }
        }
        VecMap(out)
    }
}

impl<K: Ord + Hash, V, S: BuildHasher> From<HashMap<K, V, S>> for VecMap<K, V> {
    fn from(hm: HashMap<K, V, S>) -> Self {
        let mut v: Vec<(K, V)> = hm.into_iter().collect();
        v.sort_unstable_by(|(k1, _), (k2, _)| k1.cmp(k2));
        VecMap(v)
    }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for VecMap<K, V> {
    // already sorted and unique
    fn from(bt: BTreeMap<K, V>) -> Self { VecMap(bt.into_iter().collect()) }
}

impl<K: Ord, V> IntoIterator for VecMap<K, V> {
    type IntoIter = IntoIter<(K, V)>;
    type Item = (K, V);

    fn into_iter(self) -> IntoIter<(K, V)> { self.0.into_iter() }
}

impl<'a, K: Ord, V> IntoIterator for &'a VecMap<K, V> {
    type IntoIter = Iter<'a, (K, V)>;
    type Item = &'a (K, V);

    fn into_iter(self) -> Iter<'a, (K, V)> { self.0.iter() }
}

impl<K: Ord, V> FromIterator<(K, V)> for VecMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> VecMap<K, V> {
        VecMap::from(Vec::from_iter(iter))
    }
}
