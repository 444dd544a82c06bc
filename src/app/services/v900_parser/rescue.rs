//! Lost-audio rescue pass
//!
//! The logger can record audio without writing a matching CSV reference,
//! e.g. when logging stops in the moment recording starts. Such recordings
//! exist on disk with a vox number inside the observed range but are absent
//! from the audio index. This pass walks the observed number range once,
//! after the main conversion pass, and re-attaches every orphaned recording
//! it can find to the most plausible waypoint.
//!
//! The attachment point is the waypoint a fixed 5 positions before the owner
//! of the next indexed recording (clamped to the first waypoint), or the last
//! waypoint when no later recording is indexed. The offset compensates the
//! device's write latency; it is an empirical constant, not a nearest-
//! neighbor search, and is preserved verbatim.

use std::path::Path;
use tracing::{debug, info};

use super::audio::{AudioIndex, attach_link, resolve_audio_path};
use crate::app::models::WayPoint;
use crate::constants::{RESCUE_ATTACH_OFFSET, vox_file_name};

/// Re-attach orphaned recordings found on disk to waypoints.
///
/// `all` is the full imported sequence in file order; `waypoint_positions`
/// holds the positions of the entries that form the waypoint collection.
/// The audio index is read-only here. A rescued recording whose target is a
/// plain waypoint promotes it in place; a rescued recording landing on a
/// track point adds a linked copy to the waypoint collection and leaves the
/// track itself untouched. Waypoints already in the collection are not
/// inserted a second time.
///
/// Returns the number of rescued recordings.
pub fn rescue_lost_audio(
    dir: &Path,
    all: &mut Vec<WayPoint>,
    waypoint_positions: &mut Vec<usize>,
    index: &AudioIndex,
) -> usize {
    let Some((first, last)) = index.observed_range() else {
        return 0;
    };
    if all.is_empty() {
        return 0;
    }

    let mut rescued = 0;

    for number in first..last {
        let vox = vox_file_name(number);
        if index.contains(&vox) {
            continue;
        }

        // Referenced by no record; only worth rescuing if it exists on disk
        let Some(path) = resolve_audio_path(dir, &vox) else {
            debug!("No recording on disk for unreferenced number {}", number);
            continue;
        };
        info!("Found lost vox file {}", vox);

        // Attach right before the owner of the next recording, if known
        let next_vox = vox_file_name(number + 1);
        let target = match index.position_of(&next_vox) {
            Some(successor) => successor.saturating_sub(RESCUE_ATTACH_OFFSET),
            None => all.len() - 1,
        };

        let display_text = format!("*{}*", vox);
        if all[target].is_track_point() {
            let mut copy = all[target].clone();
            attach_link(&mut copy, &path, &display_text, number);
            all.push(copy);
            waypoint_positions.push(all.len() - 1);
        } else {
            attach_link(&mut all[target], &path, &display_text, number);
        }

        info!(
            "Linked file {} to position {:.6}/{:.6}",
            vox, all[target].position.lat, all[target].position.lon
        );
        rescued += 1;
    }

    rescued
}
