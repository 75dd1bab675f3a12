use gg_core::config::MatchStrategy;
use gg_core::quadrant::QUADRANTS;

use crate::block::BlockProfile;
use crate::library::GlyphLibrary;
use crate::signature::GlyphSignature;

/// Find the signature that best matches a block profile.
///
/// Total: every profile maps to some signature, falling back to the
/// library's darkest or brightest sentinel when a brightness search
/// exhausts its range. Deterministic for a given library and profile.
#[must_use]
pub fn best_match<'a>(
    profile: &BlockProfile,
    library: &'a GlyphLibrary,
    strategy: MatchStrategy,
) -> &'a GlyphSignature {
    match strategy {
        MatchStrategy::BandSearch => band_search(profile, library),
        MatchStrategy::AccumulatingSearch => accumulating_search(profile, library),
    }
}

/// Exact-bucket lookup, then symmetric outward expansion.
///
/// At each offset the high-side bucket is reduced first and acts as the
/// first tie-break argument when both sides produce a candidate. Once one
/// side leaves the valid brightness range the expansion continues on the
/// other side alone; exhausting the dark end falls back to the darkest
/// sentinel, the bright end to the brightest.
fn band_search<'a>(profile: &BlockProfile, library: &'a GlyphLibrary) -> &'a GlyphSignature {
    let avg = profile.average;

    if let Some(bucket) = library.bucket(avg) {
        return reduce(bucket, profile);
    }

    let mut dx = 1;
    while avg - dx > 0 && avg + dx < 256 {
        let high = library.bucket(avg + dx).map(|b| reduce(b, profile));
        let low = library.bucket(avg - dx).map(|b| reduce(b, profile));
        match (high, low) {
            (Some(h), Some(l)) => return closer(h, l, profile),
            (Some(h), None) => return h,
            (None, Some(l)) => return l,
            (None, None) => {}
        }
        dx += 1;
    }

    if avg - dx <= 0 {
        // dark side exhausted: keep expanding upward only
        while avg + dx < 256 {
            if let Some(bucket) = library.bucket(avg + dx) {
                return reduce(bucket, profile);
            }
            dx += 1;
        }
        library.darkest()
    } else {
        while avg - dx > 0 {
            if let Some(bucket) = library.bucket(avg - dx) {
                return reduce(bucket, profile);
            }
            dx += 1;
        }
        library.brightest()
    }
}

/// One-directional accumulation: every bucket at `avg + dx` for dx = 0, 1,
/// … is folded into a running best candidate (the previous best is folded
/// last), while both `avg - dx` and `avg + dx` stay inside the open
/// brightness range. Falls back to a sentinel chosen by which boundary
/// stopped the loop.
fn accumulating_search<'a>(
    profile: &BlockProfile,
    library: &'a GlyphLibrary,
) -> &'a GlyphSignature {
    let avg = profile.average;

    let mut best: Option<&GlyphSignature> = None;
    let mut dx = 0;
    while avg - dx > 0 && avg + dx < 256 {
        if let Some(bucket) = library.bucket(avg + dx) {
            let candidate = reduce(bucket, profile);
            best = Some(match best {
                None => candidate,
                Some(prev) => closer(candidate, prev, profile),
            });
        }
        dx += 1;
    }

    match best {
        Some(sig) => sig,
        None if avg - dx <= 0 => library.darkest(),
        None => library.brightest(),
    }
}

/// Fold a non-empty bucket left-to-right, in stored order.
fn reduce<'a>(bucket: &'a [GlyphSignature], profile: &BlockProfile) -> &'a GlyphSignature {
    bucket
        .iter()
        .skip(1)
        .fold(&bucket[0], |best, sig| closer(best, sig, profile))
}

/// Pairwise tie-break between two candidates.
///
/// Each of the 9 quadrant positions awards one point to the candidate
/// whose value is strictly closer to the profile's; an exact tie awards
/// neither. More points wins; on equal points the first argument wins.
/// The asymmetry is part of the contract: callers order their arguments
/// to express preference.
fn closer<'a>(
    first: &'a GlyphSignature,
    second: &'a GlyphSignature,
    profile: &BlockProfile,
) -> &'a GlyphSignature {
    let mut first_points = 0u32;
    let mut second_points = 0u32;
    for i in 0..QUADRANTS {
        let d1 = (i32::from(first.quadrants[i]) - profile.quadrants[i]).abs();
        let d2 = (i32::from(second.quadrants[i]) - profile.quadrants[i]).abs();
        if d1 < d2 {
            first_points += 1;
        } else if d2 < d1 {
            second_points += 1;
        }
    }
    if second_points > first_points {
        second
    } else {
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(ch: char, average: u8, quadrants: [u8; 9]) -> GlyphSignature {
        GlyphSignature {
            ch,
            average,
            quadrants,
        }
    }

    fn profile(average: i32, quadrants: [i32; 9]) -> BlockProfile {
        BlockProfile {
            average,
            quadrants,
        }
    }

    fn library(sigs: Vec<GlyphSignature>) -> GlyphLibrary {
        GlyphLibrary::from_signatures(sigs).expect("non-empty")
    }

    #[test]
    fn tie_break_counts_strictly_closer_quadrants() {
        let target = profile(100, [100; 9]);
        let near = sig('a', 100, [101; 9]);
        let far = sig('b', 100, [120; 9]);
        assert_eq!(closer(&near, &far, &target).ch, 'a');
        assert_eq!(closer(&far, &near, &target).ch, 'a');
    }

    #[test]
    fn tie_break_equal_points_keeps_first_argument() {
        let target = profile(100, [100; 9]);
        // symmetric around the target in every quadrant: no points awarded
        let below = sig('a', 100, [90; 9]);
        let above = sig('b', 100, [110; 9]);
        assert_eq!(closer(&below, &above, &target).ch, 'a');
        assert_eq!(closer(&above, &below, &target).ch, 'b');
    }

    #[test]
    fn tie_break_four_four_split_keeps_first_argument() {
        let target = profile(100, [100; 9]);
        let mut qa = [100u8; 9];
        let mut qb = [100u8; 9];
        // a wins quadrants 0..4, b wins quadrants 4..8, quadrant 8 ties
        for i in 0..4 {
            qa[i] = 101;
            qb[i] = 110;
        }
        for i in 4..8 {
            qa[i] = 110;
            qb[i] = 101;
        }
        let a = sig('a', 100, qa);
        let b = sig('b', 100, qb);
        assert_eq!(closer(&a, &b, &target).ch, 'a');
        assert_eq!(closer(&b, &a, &target).ch, 'b');
    }

    #[test]
    fn reduce_folds_in_stored_order() {
        let target = profile(100, [100; 9]);
        let equal_a = sig('a', 100, [90; 9]);
        let equal_b = sig('b', 100, [110; 9]);
        // neither earns points against the other: stored order decides
        let lib = library(vec![equal_a, equal_b]);
        let bucket = lib.bucket(100).expect("bucket");
        assert_eq!(reduce(bucket, &target).ch, 'a');
    }

    #[test]
    fn band_search_prefers_exact_bucket() {
        let lib = library(vec![
            sig('x', 90, [90; 9]),
            sig('y', 100, [100; 9]),
            sig('z', 110, [110; 9]),
        ]);
        let hit = band_search(&profile(100, [100; 9]), &lib);
        assert_eq!(hit.ch, 'y');
    }

    #[test]
    fn band_search_expands_symmetrically_high_side_first() {
        let lib = library(vec![sig('l', 95, [95; 9]), sig('h', 105, [105; 9])]);
        // equidistant buckets at dx = 5; tie-break gets the high side as
        // first argument, and the profile sits exactly between the two,
        // so the high side wins the 0-0 tie
        let hit = band_search(&profile(100, [100; 9]), &lib);
        assert_eq!(hit.ch, 'h');
    }

    #[test]
    fn band_search_zero_average_expands_upward_only() {
        let lib = library(vec![sig('d', 30, [30; 9]), sig('b', 200, [200; 9])]);
        let hit = band_search(&profile(0, [0; 9]), &lib);
        assert_eq!(hit.ch, 'd');
    }

    #[test]
    fn band_search_one_sided_downward_expansion() {
        // a bright profile with only a dark glyph: the high side leaves
        // the range first, the expansion continues downward and finds it
        let lib = library(vec![sig('d', 40, [40; 9])]);
        let hit = band_search(&profile(250, [250; 9]), &lib);
        assert_eq!(hit.ch, 'd');
        let hit = band_search(&profile(255, [255; 9]), &lib);
        assert_eq!(hit.ch, 'd');
    }

    #[test]
    fn band_search_dark_sentinel_when_only_bucket_zero_exists() {
        // brightness 0 is never probed by expansion; once both directions
        // are spent the darkest sentinel stands in, regardless of
        // quadrant detail
        let a = sig('a', 0, [0; 9]);
        let b = sig('b', 0, [5; 9]);
        let lib = library(vec![a, b]);
        let hit = band_search(&profile(5, [5; 9]), &lib);
        assert_eq!(hit.ch, 'a');
    }

    #[test]
    fn accumulating_search_never_looks_down() {
        // target 100: the bucket at 90 is below and must be ignored
        let lib = library(vec![sig('v', 90, [90; 9]), sig('w', 110, [110; 9])]);
        let hit = accumulating_search(&profile(100, [100; 9]), &lib);
        assert_eq!(hit.ch, 'w');
    }

    #[test]
    fn accumulating_search_sentinel_on_dark_exhaustion() {
        // all glyphs sit below the reachable upward range
        let lib = library(vec![sig('d', 10, [10; 9]), sig('e', 20, [20; 9])]);
        // avg 200: upward probes find nothing and the high boundary stops
        // the loop first, so the brightest sentinel stands in
        let hit = accumulating_search(&profile(200, [200; 9]), &lib);
        assert_eq!(hit.ch, 'e');

        // avg 30 with glyphs only far above is the dark-exhaustion case
        let lib = library(vec![sig('f', 200, [200; 9])]);
        let hit = accumulating_search(&profile(30, [30; 9]), &lib);
        assert_eq!(hit.ch, 'f');
    }

    #[test]
    fn accumulating_search_folds_running_best_last() {
        let target = profile(100, [100; 9]);
        // bucket 100 holds a candidate equal in score to the bucket at
        // 101; the earlier best is folded as the second argument, so the
        // newer bucket's winner takes the tie
        let lib = library(vec![sig('a', 100, [90; 9]), sig('b', 101, [110; 9])]);
        let hit = accumulating_search(&target, &lib);
        assert_eq!(hit.ch, 'b');
    }
}
