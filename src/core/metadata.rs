//! Per-entry metadata for the long report.
//!
//! [extract] runs a non-dereferencing status call on an entry and resolves its owner and group
//! through an [IdentityResolver]. The result is a plain [MetadataRecord].

use crate::core::Entry;
use crate::core::error::{IdKind, ListError, ListResult};

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::symlink_metadata;
use std::os::unix::fs::MetadataExt;
use std::sync::{LazyLock, RwLock};

use uzers::{get_group_by_gid, get_user_by_uid};

/// rwx triplets indexed by one octal permission digit.
pub const PERMISSION_TRIPLETS: [&str; 8] = ["---", "--x", "-w-", "-wx", "r--", "r-x", "rw-", "rwx"];

// Object-type bits of st_mode
const S_IFMT: u32 = 0o170_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFLNK: u32 = 0o120_000;
const S_IFREG: u32 = 0o100_000;

/// Kind of filesystem object behind an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    Other,
}

impl EntryKind {
    /// Decodes the object-type bits of a raw mode value.
    pub fn from_mode(mode: u32) -> Self {
        match mode & S_IFMT {
            S_IFDIR => EntryKind::Directory,
            S_IFLNK => EntryKind::Symlink,
            S_IFREG => EntryKind::Regular,
            _ => EntryKind::Other,
        }
    }

    /// Single character shown in front of the permission string.
    /// Kinds without a dedicated marker fall back to `-`.
    pub fn marker(&self) -> char {
        match self {
            EntryKind::Directory => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::Regular | EntryKind::Other => '-',
        }
    }
}

/// Maps one octal digit (0-7) to its rwx triplet.
#[inline]
pub fn permission_triplet(digit: u32) -> &'static str {
    PERMISSION_TRIPLETS[(digit & 0o7) as usize]
}

/// Inverse of [permission_triplet].
pub fn triplet_digit(triplet: &str) -> Option<u32> {
    PERMISSION_TRIPLETS
        .iter()
        .position(|t| *t == triplet)
        .map(|i| i as u32)
}

/// Builds the 9-character owner/group/other permission string from the three low octal digits.
pub fn decode_permission(mode: u32) -> String {
    let mut out = String::with_capacity(9);
    for shift in [6, 3, 0] {
        out.push_str(permission_triplet(mode >> shift));
    }
    out
}

/// Maps numeric owner and group ids to display names.
pub trait IdentityResolver {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// Resolves ids through the system user and group databases.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentity;

static OWNER_CACHE: LazyLock<RwLock<HashMap<u32, String>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));
static GROUP_CACHE: LazyLock<RwLock<HashMap<u32, String>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

fn cached_lookup(
    cache: &RwLock<HashMap<u32, String>>,
    id: u32,
    lookup: impl FnOnce(u32) -> Option<String>,
) -> Option<String> {
    if let Ok(cache) = cache.read()
        && let Some(name) = cache.get(&id)
    {
        return Some(name.clone());
    }
    // Misses are not cached, they abort the listing anyway
    let name = lookup(id)?;
    if let Ok(mut cache) = cache.write() {
        cache.insert(id, name.clone());
    }
    Some(name)
}

impl IdentityResolver for SystemIdentity {
    fn user_name(&self, uid: u32) -> Option<String> {
        cached_lookup(&OWNER_CACHE, uid, |uid| {
            get_user_by_uid(uid).map(|u| u.name().to_string_lossy().into_owned())
        })
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        cached_lookup(&GROUP_CACHE, gid, |gid| {
            get_group_by_gid(gid).map(|g| g.name().to_string_lossy().into_owned())
        })
    }
}

/// Everything the long report shows about one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub name: OsString,
    pub kind: EntryKind,
    pub permission: String,
    pub hardlinks: u64,
    pub owner: String,
    pub group: String,
    pub size: u64,
    /// Modification time in seconds since the Unix epoch, as stored by the filesystem.
    pub modified: i64,
    /// Allocated 512-byte blocks, as reported by the status call.
    pub blocks: u64,
}

impl MetadataRecord {
    /// Type marker followed by the permission string, e.g. `drwxr-xr-x`.
    pub fn mode_string(&self) -> String {
        let mut s = String::with_capacity(10);
        s.push(self.kind.marker());
        s.push_str(&self.permission);
        s
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Runs `lstat` on the entry and resolves its owner and group.
///
/// # Errors
/// Status call failures map through [ListError::from_io]; an id without a name is
/// [ListError::IdentityResolution].
pub fn extract(entry: &Entry, resolver: &dyn IdentityResolver) -> ListResult<MetadataRecord> {
    let path = entry.path();
    let md = symlink_metadata(&path).map_err(|e| ListError::from_io(&path, e))?;

    let owner = resolver
        .user_name(md.uid())
        .ok_or_else(|| ListError::IdentityResolution {
            kind: IdKind::User,
            id: md.uid(),
            path: path.clone(),
        })?;
    let group = resolver
        .group_name(md.gid())
        .ok_or_else(|| ListError::IdentityResolution {
            kind: IdKind::Group,
            id: md.gid(),
            path: path.clone(),
        })?;

    let mode = md.mode();
    Ok(MetadataRecord {
        name: entry.name().to_os_string(),
        kind: EntryKind::from_mode(mode),
        permission: decode_permission(mode),
        hardlinks: md.nlink(),
        owner,
        group,
        size: md.size(),
        modified: md.mtime(),
        blocks: md.blocks(),
    })
}
