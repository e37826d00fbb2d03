//! The playlist: an ordered list of tracks plus the playback cursor.
//!
//! Navigation never touches an empty list; every operation that moves the
//! cursor returns the new current track (or `None` when there is nothing to
//! play), so callers do not have to re-check emptiness.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::library::Track;

pub struct Playlist {
    tracks: Vec<Track>,
    current: usize,
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new()
    }
}

impl Playlist {
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            current: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Cursor position. Meaningless while the playlist is empty.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    /// Append a track at the end of the list.
    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Move the cursor to `index`. Out-of-range indices are ignored.
    pub fn set_current(&mut self, index: usize) {
        if index < self.tracks.len() {
            self.current = index;
        }
    }

    /// Remove the track at `index` and return it.
    ///
    /// Cursor policy: a removal before the cursor decrements it so the same
    /// track stays current; a removal at the cursor leaves the index in
    /// place (now naming the following track), clamped to the new last
    /// index. An emptied list resets the cursor to 0.
    pub fn remove_at(&mut self, index: usize) -> Option<Track> {
        if index >= self.tracks.len() {
            return None;
        }
        let removed = self.tracks.remove(index);

        if self.tracks.is_empty() {
            self.current = 0;
        } else if index < self.current {
            self.current -= 1;
        } else if self.current >= self.tracks.len() {
            self.current = self.tracks.len() - 1;
        }

        Some(removed)
    }

    /// Randomly permute the tracks (uniform Fisher-Yates).
    ///
    /// The cursor is NOT re-anchored: it keeps pointing at the same
    /// position, so "the current track" silently becomes whatever landed
    /// there. Callers that want to follow a track across a shuffle must do
    /// so themselves.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tracks.shuffle(rng);
    }

    /// Advance the cursor. At the last position: wrap to 0 when `wrap` is
    /// true, stay otherwise. Returns the new current track; `None` on an
    /// empty list.
    pub fn next(&mut self, wrap: bool) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        if self.current + 1 < self.tracks.len() {
            self.current += 1;
        } else if wrap {
            self.current = 0;
        }
        self.current()
    }

    /// Move the cursor back one position, wrapping from 0 to the last
    /// position. Returns the new current track; `None` on an empty list.
    pub fn previous(&mut self) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        if self.current == 0 {
            self.current = self.tracks.len() - 1;
        } else {
            self.current -= 1;
        }
        self.current()
    }
}

#[cfg(test)]
mod tests;
