// Copyright 2024, F. Stan
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Packed view over the named sub-fields of a single byte register.
//!
//! A register layout is an enum implementing [`Field`]; its `LAYOUT` lists
//! every sub-field (reserved bits included) least significant first, with
//! the width in bits. [`BitField`] keeps the current value of every field, so
//! writing one field and encoding again leaves the others untouched.

use std::fmt;
use std::marker::PhantomData;

/// Width of the backing storage unit in bits.
const STORAGE_BITS: u8 = 8;

/// Named sub-field of a byte register.
pub trait Field: Copy + Eq + fmt::Debug + 'static {
    /// Sub-fields packed least significant first, as `(field, width)`.
    const LAYOUT: &'static [(Self, u8)];
}

/// Current values of every sub-field of one register.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitField<F: Field> {
    values: [u8; STORAGE_BITS as usize],
    layout: PhantomData<F>,
}

impl<F: Field> BitField<F> {
    /// Creates a register mirror with every field cleared.
    pub fn new() -> Self {
        debug_assert!(
            F::LAYOUT.iter().map(|&(_, width)| u32::from(width)).sum::<u32>()
                <= u32::from(STORAGE_BITS),
            "bit field layout wider than its storage unit"
        );
        BitField {
            values: [0; STORAGE_BITS as usize],
            layout: PhantomData,
        }
    }

    /// Creates a register mirror holding the fields of `raw`.
    pub fn from_raw(raw: u8) -> Self {
        let mut bitfield = Self::new();
        bitfield.decode(raw);
        bitfield
    }

    fn mask(width: u8) -> u8 {
        ((1u16 << width) - 1) as u8
    }

    /// Index and width of `field` within the layout.
    fn locate(field: F) -> Option<(usize, u8)> {
        F::LAYOUT
            .iter()
            .position(|&(candidate, _)| candidate == field)
            .map(|index| (index, F::LAYOUT[index].1))
    }

    /// Replaces every field with the value it has in `raw`.
    pub fn decode(&mut self, raw: u8) {
        let mut shift = 0;
        for (index, &(_, width)) in F::LAYOUT.iter().enumerate() {
            self.values[index] = (raw >> shift) & Self::mask(width);
            shift += width;
        }
    }

    /// Packs the current field values into the register byte.
    pub fn encode(&self) -> u8 {
        let mut raw = 0;
        let mut shift = 0;
        for (index, &(_, width)) in F::LAYOUT.iter().enumerate() {
            raw |= (self.values[index] & Self::mask(width)) << shift;
            shift += width;
        }
        raw
    }

    /// Current value of `field`.
    pub fn get(&self, field: F) -> u8 {
        match Self::locate(field) {
            Some((index, _)) => self.values[index],
            None => 0,
        }
    }

    /// True when `field` holds a non-zero value.
    pub fn is_set(&self, field: F) -> bool {
        self.get(field) != 0
    }

    /// Stores `value` in `field`, silently truncated to the field width.
    pub fn set(&mut self, field: F, value: u8) {
        if let Some((index, width)) = Self::locate(field) {
            self.values[index] = value & Self::mask(width);
        }
    }

    /// Single-bit convenience over [`BitField::set`].
    pub fn set_flag(&mut self, field: F, on: bool) {
        self.set(field, u8::from(on));
    }

    /// Every field paired with its current value, in layout order.
    pub fn fields(&self) -> impl Iterator<Item = (F, u8)> + '_ {
        F::LAYOUT
            .iter()
            .enumerate()
            .map(move |(index, &(field, _))| (field, self.values[index]))
    }
}

impl<F: Field> Default for BitField<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field> fmt::Debug for BitField<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut map = f.debug_map();
        for (field, value) in self.fields() {
            map.entry(&field, &value);
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Sample {
        Low,
        Pair,
        Gap,
        Wide,
    }

    impl Field for Sample {
        const LAYOUT: &'static [(Self, u8)] = &[
            (Sample::Low, 1),
            (Sample::Pair, 2),
            (Sample::Gap, 1),
            (Sample::Wide, 3),
        ];
    }

    #[test]
    fn fields_pack_least_significant_first() {
        let mut bits = BitField::<Sample>::new();
        bits.set(Sample::Low, 1);
        bits.set(Sample::Pair, 0b10);
        bits.set(Sample::Wide, 0b101);
        assert_eq!(bits.encode(), 0b0101_0101);
    }

    #[test]
    fn decode_splits_every_field() {
        let bits = BitField::<Sample>::from_raw(0b0110_1110);
        assert_eq!(bits.get(Sample::Low), 0);
        assert_eq!(bits.get(Sample::Pair), 0b11);
        assert_eq!(bits.get(Sample::Gap), 1);
        assert_eq!(bits.get(Sample::Wide), 0b110);
    }

    #[test]
    fn bits_outside_the_layout_are_dropped() {
        let bits = BitField::<Sample>::from_raw(0xFF);
        assert_eq!(bits.encode(), 0x7F);
    }

    #[test]
    fn oversized_values_are_truncated_to_width() {
        let mut bits = BitField::<Sample>::new();
        bits.set(Sample::Pair, 0xFF);
        assert_eq!(bits.get(Sample::Pair), 0b11);
        bits.set(Sample::Wide, 0b1_1010);
        assert_eq!(bits.get(Sample::Wide), 0b010);
        assert_eq!(bits.encode(), 0b0010_0110);
    }

    #[test]
    fn decode_after_encode_matches_masked_values() {
        for pair in 0..=0xFFu8 {
            let mut bits = BitField::<Sample>::new();
            bits.set(Sample::Pair, pair);
            bits.set(Sample::Wide, pair.wrapping_mul(7));
            let decoded = BitField::<Sample>::from_raw(bits.encode());
            assert_eq!(decoded, bits);
            assert_eq!(decoded.get(Sample::Pair), pair & 0b11);
        }
    }

    #[test]
    fn setting_one_field_keeps_the_others() {
        let mut bits = BitField::<Sample>::from_raw(0b0111_0001);
        bits.set(Sample::Pair, 0b01);
        assert_eq!(bits.get(Sample::Low), 1);
        assert_eq!(bits.get(Sample::Gap), 0);
        assert_eq!(bits.get(Sample::Wide), 0b111);
        assert_eq!(bits.encode(), 0b0111_0011);

        bits.set_flag(Sample::Low, false);
        assert!(!bits.is_set(Sample::Low));
        assert_eq!(bits.get(Sample::Pair), 0b01);
    }
}
