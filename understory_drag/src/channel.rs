// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Channels: tags that decide which draggables may interact with which drop zones.
//!
//! A channel is either a single tag or a list of tags. Two channels are
//! *linked* when their tag sets intersect, which covers all three shapes:
//!
//! - scalar to scalar: the tags are equal,
//! - scalar to list: the list contains the scalar,
//! - list to list: the lists share at least one tag.
//!
//! ```
//! use understory_drag::channel::{Channel, linked};
//!
//! let item = Channel::one("odd");
//! let zone = Channel::many(["odd", "irrational"]);
//! assert!(item.links(&zone));
//! assert!(!item.links(&Channel::one("even")));
//!
//! // Unset channels only link with each other.
//! assert!(linked(None, None));
//! assert!(!linked(Some(&item), None));
//! ```

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;

/// A single channel tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChannelTag {
    /// A named tag.
    Name(Cow<'static, str>),
    /// A numeric tag.
    Number(i64),
}

impl From<&'static str> for ChannelTag {
    fn from(value: &'static str) -> Self {
        Self::Name(Cow::Borrowed(value))
    }
}

impl From<String> for ChannelTag {
    fn from(value: String) -> Self {
        Self::Name(Cow::Owned(value))
    }
}

impl From<i64> for ChannelTag {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for ChannelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A scalar or list channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Channel {
    /// A single tag.
    One(ChannelTag),
    /// A list of tags. An empty list links with nothing.
    Many(SmallVec<[ChannelTag; 4]>),
}

impl Channel {
    /// A scalar channel.
    pub fn one(tag: impl Into<ChannelTag>) -> Self {
        Self::One(tag.into())
    }

    /// A list channel.
    pub fn many<T: Into<ChannelTag>>(tags: impl IntoIterator<Item = T>) -> Self {
        Self::Many(tags.into_iter().map(Into::into).collect())
    }

    /// The tags of this channel, one for a scalar.
    pub fn tags(&self) -> &[ChannelTag] {
        match self {
            Self::One(tag) => core::slice::from_ref(tag),
            Self::Many(tags) => tags.as_slice(),
        }
    }

    /// Returns `true` if the two channels share at least one tag.
    pub fn links(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::One(a), Self::One(b)) => a == b,
            (Self::One(a), Self::Many(list)) | (Self::Many(list), Self::One(a)) => {
                list.contains(a)
            }
            (Self::Many(a), Self::Many(b)) => a.iter().any(|tag| b.contains(tag)),
        }
    }
}

impl From<ChannelTag> for Channel {
    fn from(value: ChannelTag) -> Self {
        Self::One(value)
    }
}

impl From<&'static str> for Channel {
    fn from(value: &'static str) -> Self {
        Self::one(value)
    }
}

impl From<String> for Channel {
    fn from(value: String) -> Self {
        Self::one(value)
    }
}

impl From<i64> for Channel {
    fn from(value: i64) -> Self {
        Self::one(value)
    }
}

/// Link test for optional channels.
///
/// Set channels link when they intersect. An unset channel links only with
/// another unset channel.
pub fn linked(drag: Option<&Channel>, drop: Option<&Channel>) -> bool {
    match (drag, drop) {
        (None, None) => true,
        (Some(drag), Some(drop)) => drag.links(drop),
        _ => false,
    }
}
