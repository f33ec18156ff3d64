// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Binary snapshot codec for the Niihau word trie.
//!
//! # Format (version 1)
//!
//! All integers are little-endian.
//!
//! ```text
//! header  : magic "MKSP" (4 bytes) | version u8 = 1
//! body    : node record of the root
//! node    : flags u8 (bit 0 = end of word, other bits zero)
//!           child_count u32
//!           child_count x { key u32 (Unicode scalar value) | node }
//! trailer : CRC-32 (IEEE) of the body bytes, u32
//! ```
//!
//! Children are written in strictly ascending key order, and every non-root
//! node either ends a word or has children. The decoder enforces all of this,
//! so any file it accepts is exactly what the encoder would produce for the
//! resulting trie.
//!
//! Snapshots are treated as untrusted input. Decoding walks the records with
//! an explicit stack and a depth limit instead of recursion, so a hostile file
//! can neither overflow the call stack nor allocate more nodes than it has
//! bytes.

use std::io::{self, Cursor, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::data_structures::{NiihauTrie, TrieNode};
use crate::error::dictionary::CorruptReason;

/// Magic bytes at the start of every snapshot.
pub const MAGIC: &[u8; 4] = b"MKSP";

/// Current snapshot format version.
pub const FORMAT_VERSION: u8 = 1;

const HEADER_LEN: usize = MAGIC.len() + 1;
const TRAILER_LEN: usize = 4;
const FLAG_END_OF_WORD: u8 = 0b0000_0001;

/// Writes the snapshot of `trie` to `writer`.
pub fn encode<W: Write>(trie: &NiihauTrie, mut writer: W) -> io::Result<()> {
    writer.write_all(MAGIC)?;
    writer.write_u8(FORMAT_VERSION)?;

    let mut body = ChecksumWriter::new(&mut writer);
    write_node(trie.root(), &mut body)?;
    let checksum = body.finish();

    writer.write_u32::<LittleEndian>(checksum)?;
    writer.flush()
}

/// Encodes `trie` into a freshly allocated buffer.
pub fn encode_to_vec(trie: &NiihauTrie) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    encode(trie, &mut buffer)?;
    Ok(buffer)
}

fn write_node<W: Write>(node: &TrieNode, writer: &mut W) -> io::Result<()> {
    let flags = if node.is_end_of_word() { FLAG_END_OF_WORD } else { 0 };
    writer.write_u8(flags)?;
    writer.write_u32::<LittleEndian>(node.children.len() as u32)?;

    for (c, child) in node.children() {
        writer.write_u32::<LittleEndian>(u32::from(c))?;
        write_node(child, writer)?;
    }
    Ok(())
}

/// Decodes a snapshot, rejecting anything the encoder would not have produced.
///
/// # Arguments
///
/// * `bytes` - The complete snapshot
/// * `max_depth` - Deepest node level accepted (the root is level 0)
pub fn decode(bytes: &[u8], max_depth: usize) -> Result<NiihauTrie, CorruptReason> {
    if bytes.len() < MAGIC.len() {
        return Err(CorruptReason::Truncated);
    }
    if &bytes[..MAGIC.len()] != MAGIC {
        return Err(CorruptReason::BadMagic);
    }
    if bytes.len() < HEADER_LEN + TRAILER_LEN {
        return Err(CorruptReason::Truncated);
    }
    let version = bytes[MAGIC.len()];
    if version != FORMAT_VERSION {
        return Err(CorruptReason::UnsupportedVersion(version));
    }

    let (body, trailer) = bytes[HEADER_LEN..].split_at(bytes.len() - HEADER_LEN - TRAILER_LEN);
    let stored = u32::from_le_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
    let computed = crc32fast::hash(body);
    if stored != computed {
        return Err(CorruptReason::ChecksumMismatch { stored, computed });
    }

    let mut cursor = Cursor::new(body);
    let root = decode_nodes(&mut cursor, max_depth)?;

    let remaining = body.len() - cursor.position() as usize;
    if remaining > 0 {
        return Err(CorruptReason::TrailingBytes(remaining));
    }

    Ok(NiihauTrie::from_root(root))
}

/// A node whose children are still being read.
struct OpenNode {
    key: Option<char>,
    node: TrieNode,
    remaining: u32,
}

impl OpenNode {
    fn read(key: Option<char>, cursor: &mut Cursor<&[u8]>) -> Result<Self, CorruptReason> {
        let flags = cursor.read_u8().map_err(|_| CorruptReason::Truncated)?;
        if flags & !FLAG_END_OF_WORD != 0 {
            return Err(CorruptReason::InvalidFlags(flags));
        }
        let remaining = cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| CorruptReason::Truncated)?;

        let mut node = TrieNode::new();
        node.is_end_of_word = flags & FLAG_END_OF_WORD != 0;
        Ok(Self {
            key,
            node,
            remaining,
        })
    }

    fn last_key(&self) -> Option<char> {
        self.node.children.keys().next_back().copied()
    }
}

fn decode_nodes(cursor: &mut Cursor<&[u8]>, max_depth: usize) -> Result<TrieNode, CorruptReason> {
    // `ancestors` holds the open parents of `current`; its length is the depth of `current`.
    let mut ancestors: Vec<OpenNode> = Vec::new();
    let mut current = OpenNode::read(None, cursor)?;

    loop {
        if current.remaining > 0 {
            let code = cursor
                .read_u32::<LittleEndian>()
                .map_err(|_| CorruptReason::Truncated)?;
            let key = char::from_u32(code).ok_or(CorruptReason::InvalidChar(code))?;
            if current.last_key().is_some_and(|last| key <= last) {
                return Err(CorruptReason::UnorderedKey(key));
            }
            if ancestors.len() + 1 > max_depth {
                return Err(CorruptReason::TooDeep(max_depth));
            }
            current.remaining -= 1;

            let child = OpenNode::read(Some(key), cursor)?;
            ancestors.push(std::mem::replace(&mut current, child));
            continue;
        }

        let depth = ancestors.len();
        let OpenNode { key, node, .. } = current;
        match (ancestors.pop(), key) {
            (Some(mut parent), Some(key)) => {
                if node.is_dead() {
                    return Err(CorruptReason::DeadNode(depth));
                }
                parent.node.children.insert(key, node);
                current = parent;
            }
            _ => return Ok(node),
        }
    }
}

/// Forwards writes while keeping a running CRC-32 of everything written.
struct ChecksumWriter<W> {
    inner: W,
    hasher: crc32fast::Hasher,
}

impl<W: Write> ChecksumWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: crc32fast::Hasher::new(),
        }
    }

    fn finish(self) -> u32 {
        self.hasher.finalize()
    }
}

impl<W: Write> Write for ChecksumWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.hasher.update(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
