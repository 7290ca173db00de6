use crate::collection::{Key, Mapping};
use crate::traversal::each;

/// Copy every entry of every source into `target`, left to right.
///
/// Later sources overwrite earlier ones and anything already in `target`.
/// An overwritten key keeps its original position.
pub fn extend<'t, 's, V>(
    target: &'t mut Mapping<V>,
    sources: impl IntoIterator<Item = &'s Mapping<V>>,
) -> &'t mut Mapping<V>
where
    V: Clone + 's,
{
    for source in sources {
        each(source, |value, key, _| {
            if let Key::Name(name) = key {
                target.insert(name.to_string(), value.clone());
            }
        });
    }
    target
}

/// Like [`extend`], but never overwrite a key that's already in `target`.
///
/// The first source that supplies a key wins.
pub fn defaults<'t, 's, V>(
    target: &'t mut Mapping<V>,
    sources: impl IntoIterator<Item = &'s Mapping<V>>,
) -> &'t mut Mapping<V>
where
    V: Clone + 's,
{
    for source in sources {
        each(source, |value, key, _| {
            if let Key::Name(name) = key {
                target
                    .entry(name.to_string())
                    .or_insert_with(|| value.clone());
            }
        });
    }
    target
}
