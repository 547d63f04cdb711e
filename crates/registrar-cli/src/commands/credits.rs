//! Credits command - sum credits of one brand.

use anyhow::{Result, bail};
use registrar::{BrandTag, Registrar, TaggedCredits};
use tracing::debug;

use crate::style::print_success;

pub fn run(major: &[u32], minor: &[u32]) -> Result<()> {
    debug!(major = major.len(), minor = minor.len(), "summing credits");

    let credits = major
        .iter()
        .map(|&n| TaggedCredits::new(BrandTag::Major, n))
        .chain(minor.iter().map(|&n| TaggedCredits::new(BrandTag::Minor, n)));

    let Some(total) = Registrar::in_memory().total_credits(credits)? else {
        bail!("no credits given; pass --major or --minor");
    };

    print_success(&total.to_string());
    Ok(())
}
