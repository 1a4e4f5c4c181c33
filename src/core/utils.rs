use std::{ fmt, marker::PhantomData };

use serde::{
    de::{ self, MapAccess, Visitor },
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

/// Catalog entries that carry their own map key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Serializes an ordered sequence of keyed entries as a JSON object, one
/// property per entry, in sequence order.
pub fn serialize_keyed<T, S>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize + Keyed,
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(items.len()))?;
    for item in items {
        map.serialize_entry(item.key(), item)?;
    }
    map.end()
}

/// Deserializes a JSON object into an ordered sequence, preserving document
/// order. Each property name must equal the entry's own `key` field.
pub fn deserialize_keyed<'de, T, D>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    T: Deserialize<'de> + Keyed,
    D: Deserializer<'de>,
{
    struct KeyedVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for KeyedVisitor<T>
    where
        T: Deserialize<'de> + Keyed,
    {
        type Value = Vec<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a string-keyed object of catalog entries")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut items = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, T>()? {
                if value.key() != key {
                    return Err(de::Error::custom(format!(
                        "entry under map key '{}' declares key '{}'",
                        key,
                        value.key()
                    )));
                }
                items.push(value);
            }
            Ok(items)
        }
    }

    deserializer.deserialize_map(KeyedVisitor(PhantomData))
}
