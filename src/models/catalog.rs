//! Static catalog of characters and their sound clips
//!
//! The catalog is built once at startup and never mutated. Each group owns
//! its entries directly, so a group and its sounds can never drift out of
//! alignment.

use crate::error::CatalogError;

use super::session::Position;

/// Avatar image reference for a group header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarRef {
    /// Image resource name in the bundled assets
    pub resource: &'static str,
    /// Two-letter badge drawn in place of the image
    pub monogram: &'static str,
}

/// One playable clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundEntry {
    pub label: &'static str,
    /// Bundled audio file name, resolved against the sounds directory
    pub resource_id: &'static str,
}

impl SoundEntry {
    pub const fn new(label: &'static str, resource_id: &'static str) -> Self {
        Self { label, resource_id }
    }
}

/// A character and the clips that belong to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub display_name: &'static str,
    pub avatar: AvatarRef,
    pub entries: Vec<SoundEntry>,
}

impl Group {
    pub fn new(display_name: &'static str, avatar: AvatarRef, entries: Vec<SoundEntry>) -> Self {
        Self {
            display_name,
            avatar,
            entries,
        }
    }
}

/// Ordered, immutable list of groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    groups: Vec<Group>,
}

impl Catalog {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// The compiled-in Rick and Morty catalog
    pub fn builtin() -> Self {
        let avatar = |resource, monogram| AvatarRef { resource, monogram };

        Self::new(vec![
            Group::new(
                "Rick",
                avatar("Rick", "RS"),
                vec![SoundEntry::new("AIDS!", "rick_aids.wav")],
            ),
            Group::new(
                "Morty",
                avatar("Morty", "MS"),
                vec![
                    SoundEntry::new("Oh man!", "morty_oh_man.wav"),
                    SoundEntry::new("Gazorpazorpfield", "morty_gazorpazorpfield.wav"),
                ],
            ),
            Group::new(
                "Mr Poopybutthole",
                avatar("Poopybutthole", "MP"),
                vec![SoundEntry::new("Ooh Wee!", "mr_poopybutthole_ooh_wee.wav")],
            ),
            Group::new(
                "Cromulons",
                avatar("Cromulons", "CR"),
                vec![
                    SoundEntry::new("Hmm...", "cromulons_hmm.wav"),
                    SoundEntry::new("I like what you got!", "cromulons_i_like_what_you_got.wav"),
                    SoundEntry::new("Good job!", "cromulons_good_job.wav"),
                    SoundEntry::new("Boo, not cool!", "cromulons_boo_not_cool.wav"),
                ],
            ),
            Group::new(
                "Jerry",
                avatar("Jerry", "JS"),
                vec![SoundEntry::new("Life is an effort!", "jerry_life_is_an_effort.wav")],
            ),
        ])
    }

    /// Number of groups
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of entries in a group
    pub fn entry_count(&self, group: usize) -> Result<usize, CatalogError> {
        self.group_at(group).map(|g| g.entries.len())
    }

    pub fn group_at(&self, group: usize) -> Result<&Group, CatalogError> {
        self.groups
            .get(group)
            .ok_or(CatalogError::IndexOutOfRange { group, entry: None })
    }

    pub fn entry_at(&self, group: usize, entry: usize) -> Result<&SoundEntry, CatalogError> {
        self.groups
            .get(group)
            .and_then(|g| g.entries.get(entry))
            .ok_or(CatalogError::IndexOutOfRange {
                group,
                entry: Some(entry),
            })
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// Every valid coordinate, in display order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.groups.iter().enumerate().flat_map(|(group, g)| {
            (0..g.entries.len()).map(move |entry| Position::new(group, entry))
        })
    }

    /// Total number of playable entries
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_group_order() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.groups().map(|g| g.display_name).collect();
        assert_eq!(
            names,
            vec!["Rick", "Morty", "Mr Poopybutthole", "Cromulons", "Jerry"]
        );
    }

    #[test]
    fn test_builtin_entry_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.group_count(), 5);
        let counts: Vec<_> = (0..catalog.group_count())
            .map(|g| catalog.entry_count(g).unwrap())
            .collect();
        assert_eq!(counts, vec![1, 2, 1, 4, 1]);
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_morty_entries() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.entry_at(1, 0).unwrap().label, "Oh man!");
        assert_eq!(catalog.entry_at(1, 1).unwrap().label, "Gazorpazorpfield");
        assert_eq!(
            catalog.entry_at(1, 1).unwrap().resource_id,
            "morty_gazorpazorpfield.wav"
        );
    }

    #[test]
    fn test_entry_at_is_stable_across_calls() {
        let catalog = Catalog::builtin();
        for pos in catalog.positions() {
            let first = catalog.entry_at(pos.group, pos.entry).unwrap().clone();
            let second = catalog.entry_at(pos.group, pos.entry).unwrap();
            assert_eq!(&first, second);
        }
    }

    #[test]
    fn test_entry_count_out_of_range() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.entry_count(5),
            Err(CatalogError::IndexOutOfRange {
                group: 5,
                entry: None
            })
        );
    }

    #[test]
    fn test_group_at_out_of_range() {
        let catalog = Catalog::builtin();
        assert!(catalog.group_at(99).is_err());
        assert_eq!(catalog.group_at(4).unwrap().display_name, "Jerry");
    }

    #[test]
    fn test_entry_at_out_of_range() {
        let catalog = Catalog::builtin();
        // Valid group, bad entry
        assert_eq!(
            catalog.entry_at(0, 1),
            Err(CatalogError::IndexOutOfRange {
                group: 0,
                entry: Some(1)
            })
        );
        // Bad group
        assert!(catalog.entry_at(10, 0).is_err());
    }

    #[test]
    fn test_positions_cover_every_entry_in_order() {
        let catalog = Catalog::builtin();
        let positions: Vec<_> = catalog.positions().collect();
        assert_eq!(positions.len(), catalog.len());
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[1], Position::new(1, 0));
        assert_eq!(positions[2], Position::new(1, 1));
        assert_eq!(positions[8], Position::new(4, 0));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.group_count(), 0);
        assert_eq!(catalog.positions().count(), 0);
    }
}
