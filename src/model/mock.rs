//! Mock library and playlist tables.
//!
//! Stand-ins for a real catalogue: the sidebar library and the song list
//! of the default playlist view.

use super::{LibraryItem, Track};

/// Sidebar library entries in display order.
pub fn library_items() -> Vec<LibraryItem> {
    vec![
        LibraryItem::new("Vibe Tribe", "Playlist • Devrishi Sikka"),
        LibraryItem::new("echoe of your name", "Playlist • Devrishi Sikka"),
        LibraryItem::new("Kill'em all", "Playlist • Devrishi Sikka"),
        LibraryItem::new("Apricity 🍁", "Playlist • Devrishi Sikka"),
        LibraryItem::new("daylist", "Playlist • Spotify"),
        LibraryItem::new("Liked Songs", "Playlist • 2,970 songs"),
        LibraryItem::new("JK's Punjabi Playlist", "Playlist • JK"),
        LibraryItem::new("Bali", "Artist"),
    ]
}

/// Five distinct songs, repeated three times to fill the playlist view.
pub fn songs() -> Vec<Track> {
    let base = [
        ("Haseen", "Talwiinder, NDS, Rippy Grewal", "Haseen", "2:54", "2 days ago"),
        (
            "Bachke Bachke (feat. Yarah)",
            "Karan Aujla, Ikky, Yarah",
            "Making Memories",
            "3:30",
            "2 days ago",
        ),
        (
            "Shake It To The Max (FLY) - Remix",
            "MOLIY, Silent Addy, Skillibeng",
            "Shake It To The Max (FLY) (Remix)",
            "2:58",
            "2 days ago",
        ),
        ("No One Noticed", "The Marias", "Submarine", "3:56", "4 days ago"),
        ("Intaha Ho Gai Intezar Ki", "Arijit Singh, Pritam", "Sharaabi", "8:49", "4 days ago"),
    ];

    (0..3)
        .flat_map(|_| base.iter())
        .map(|(title, artist, album, duration, added)| {
            Track::new(*title, *artist, *album, *duration).with_date_added(*added)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_songs_parse() {
        let songs = songs();
        assert_eq!(songs.len(), 15);
        assert!(songs.iter().all(|s| s.duration_secs() > 0));
        assert_eq!(songs[4].duration_secs(), 529);
    }

    #[test]
    fn test_library_has_liked_collection() {
        let items = library_items();
        assert_eq!(items.len(), 8);
        assert_eq!(items.iter().filter(|i| i.is_liked_collection()).count(), 1);
    }
}
