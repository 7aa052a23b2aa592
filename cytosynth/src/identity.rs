//! Per-invocation identity codes and the identity raster.

use std::collections::HashMap;

use common::Raster;

use crate::table::CellRecord;

/// Identity labels mapped to 1-based codes in first-encountered order.
///
/// Codes are local to one invocation; they are not stable across fields of
/// view or samples.
#[derive(Debug, Clone, Default)]
pub struct IdentityIndex {
    codes: HashMap<String, u32>,
    order: Vec<String>,
}

impl IdentityIndex {
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a CellRecord>,
    {
        let mut index = Self::default();
        for row in rows {
            if !index.codes.contains_key(&row.identity) {
                let code = index.order.len() as u32 + 1;
                index.codes.insert(row.identity.clone(), code);
                index.order.push(row.identity.clone());
            }
        }
        index
    }

    /// Code for an identity label, if it was seen.
    pub fn code(&self, identity: &str) -> Option<u32> {
        self.codes.get(identity).copied()
    }

    /// Labels with their codes, in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.order
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i as u32 + 1))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Labels each listed cell's mask footprint with its identity code.
///
/// Pixels not covered by any listed object stay 0. Rows are applied in
/// order, so a later row overwrites an earlier one sharing mask pixels.
pub fn identity_raster(
    mask: &Raster<u32>,
    rows: &[&CellRecord],
    index: &IdentityIndex,
) -> Raster<u32> {
    let mut out = Raster::zeroed(mask.width(), mask.height());

    for row in rows {
        let Some(code) = index.code(&row.identity) else {
            continue;
        };
        for (mask_px, out_px) in mask.iter().zip(out.pixels_mut()) {
            if *mask_px == row.object_number {
                *out_px = code;
            }
        }
    }

    out
}
