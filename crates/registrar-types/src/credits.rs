//! Branded credit values.
//!
//! Major and minor credits carry the same payload (a credit count) but are
//! never interchangeable. The distinction is enforced two ways:
//!
//! - **Statically** through [`Credits<B>`], where the brand is a type
//!   parameter. Summing a `Credits<Major>` with a `Credits<Minor>` does not
//!   compile:
//!
//! ```compile_fail
//! use registrar_types::{major_credits, minor_credits, sum_credits};
//!
//! let total = sum_credits(major_credits(4), minor_credits(2));
//! ```
//!
//! - **At runtime** through [`TaggedCredits`], for values whose brand is only
//!   known once input has been parsed. [`TaggedCredits::combine`] rejects
//!   mismatched brands with [`BrandMismatchError`].

use std::fmt::{self, Debug, Display};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Major {}
    impl Sealed for super::Minor {}
}

/// Runtime discriminant of a credit brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandTag {
    Major,
    Minor,
}

impl Display for BrandTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrandTag::Major => write!(f, "major"),
            BrandTag::Minor => write!(f, "minor"),
        }
    }
}

/// A credit brand. Sealed: only [`Major`] and [`Minor`] exist.
pub trait Brand: sealed::Sealed + Copy + Eq + Debug + Default + 'static {
    /// Discriminant carried by values of this brand once erased.
    const TAG: BrandTag;
}

/// Brand marker for major credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Major;

/// Brand marker for minor credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Minor;

impl Brand for Major {
    const TAG: BrandTag = BrandTag::Major;
}

impl Brand for Minor {
    const TAG: BrandTag = BrandTag::Minor;
}

// ============================================================================
// Errors
// ============================================================================

/// Two credit values with different brands were combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot combine {left} credits with {right} credits")]
pub struct BrandMismatchError {
    pub left: BrandTag,
    pub right: BrandTag,
}

/// Errors from checked credit arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreditsError {
    #[error(transparent)]
    BrandMismatch(#[from] BrandMismatchError),

    #[error("{brand} credit total overflowed")]
    Overflow { brand: BrandTag },
}

// ============================================================================
// Statically branded credits
// ============================================================================

/// A credit count whose brand is fixed at compile time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Credits<B: Brand> {
    credits: u32,
    brand: PhantomData<B>,
}

impl<B: Brand> Credits<B> {
    pub fn new(credits: u32) -> Self {
        Self {
            credits,
            brand: PhantomData,
        }
    }

    /// Returns the credit count.
    pub fn credits(&self) -> u32 {
        self.credits
    }

    /// Returns the brand discriminant.
    pub fn brand(&self) -> BrandTag {
        B::TAG
    }

    /// Adds two same-brand values, reporting overflow instead of panicking.
    pub fn checked_add(self, other: Self) -> Result<Self, CreditsError> {
        self.credits
            .checked_add(other.credits)
            .map(Self::new)
            .ok_or(CreditsError::Overflow { brand: B::TAG })
    }
}

impl<B: Brand> Debug for Credits<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credits<{}>({})", B::TAG, self.credits)
    }
}

impl<B: Brand> Display for Credits<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} credits", self.credits, B::TAG)
    }
}

/// # Panics
///
/// Panics on overflow in debug builds, like integer addition.
impl<B: Brand> Add for Credits<B> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.credits + rhs.credits)
    }
}

impl<B: Brand> Sum for Credits<B> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Creates major credits.
pub fn major_credits(credits: u32) -> Credits<Major> {
    Credits::new(credits)
}

/// Creates minor credits.
pub fn minor_credits(credits: u32) -> Credits<Minor> {
    Credits::new(credits)
}

/// Sums two credit values of the same brand.
///
/// # Examples
///
/// ```
/// # use registrar_types::{major_credits, sum_credits};
/// let total = sum_credits(major_credits(4), major_credits(3));
/// assert_eq!(total.credits(), 7);
/// ```
pub fn sum_credits<B: Brand>(a: Credits<B>, b: Credits<B>) -> Credits<B> {
    a + b
}

pub fn sum_major_credits(a: Credits<Major>, b: Credits<Major>) -> Credits<Major> {
    sum_credits(a, b)
}

pub fn sum_minor_credits(a: Credits<Minor>, b: Credits<Minor>) -> Credits<Minor> {
    sum_credits(a, b)
}

// ============================================================================
// Runtime-tagged credits
// ============================================================================

/// A credit count whose brand travels as a value.
///
/// The brand is set once by [`TaggedCredits::new`] (or by converting a
/// [`Credits<B>`]) and never changes afterwards. Deserialization goes
/// through [`TaggedCredits::new`] as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "TaggedCreditsRepr")]
pub struct TaggedCredits {
    credits: u32,
    brand: BrandTag,
}

/// Wire form of [`TaggedCredits`].
#[derive(Deserialize)]
struct TaggedCreditsRepr {
    credits: u32,
    brand: BrandTag,
}

impl From<TaggedCreditsRepr> for TaggedCredits {
    fn from(repr: TaggedCreditsRepr) -> Self {
        Self::new(repr.brand, repr.credits)
    }
}

impl TaggedCredits {
    pub fn new(brand: BrandTag, credits: u32) -> Self {
        Self { credits, brand }
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn brand(&self) -> BrandTag {
        self.brand
    }

    /// Sums two values, failing unless both carry the same brand.
    ///
    /// # Examples
    ///
    /// ```
    /// # use registrar_types::{BrandTag, CreditsError, TaggedCredits};
    /// let math = TaggedCredits::new(BrandTag::Major, 4);
    /// let art = TaggedCredits::new(BrandTag::Minor, 2);
    /// assert!(matches!(math.combine(art), Err(CreditsError::BrandMismatch(_))));
    /// ```
    pub fn combine(self, other: Self) -> Result<Self, CreditsError> {
        if self.brand != other.brand {
            return Err(BrandMismatchError {
                left: self.brand,
                right: other.brand,
            }
            .into());
        }

        let credits = self
            .credits
            .checked_add(other.credits)
            .ok_or(CreditsError::Overflow { brand: self.brand })?;

        Ok(Self::new(self.brand, credits))
    }
}

impl Display for TaggedCredits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} credits", self.credits, self.brand)
    }
}

impl<B: Brand> From<Credits<B>> for TaggedCredits {
    fn from(value: Credits<B>) -> Self {
        Self::new(B::TAG, value.credits)
    }
}

impl<B: Brand> TryFrom<TaggedCredits> for Credits<B> {
    type Error = BrandMismatchError;

    fn try_from(value: TaggedCredits) -> Result<Self, Self::Error> {
        if value.brand == B::TAG {
            Ok(Credits::new(value.credits))
        } else {
            Err(BrandMismatchError {
                left: B::TAG,
                right: value.brand,
            })
        }
    }
}
