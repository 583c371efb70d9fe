//! Greedy track assignment.
//!
//! Consumes a day's ordered segments and places each one on the lowest
//! collision-free track of the running cluster. Clusters grow while
//! consecutive segments stay transitively connected through any track; a
//! segment that collides with nothing in the running cluster opens a new
//! one. The geometry layer divides a day column's width by each cluster's
//! track count, which is why counts are per cluster rather than global.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::segment::DaySegment;

use super::overlap::overlaps;

/// A maximal group of transitively overlapping segments sharing a pool of
/// numbered tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Event whose segment seeded this cluster
    pub owner_event_id: i64,
    /// Track number to segments placed there, in insertion order.
    /// Segments within one track never overlap.
    pub tracks: Vec<Vec<DaySegment>>,
}

impl Cluster {
    fn seeded_by(segment: &DaySegment) -> Self {
        Self {
            owner_event_id: segment.event_id,
            tracks: vec![Vec::new()],
        }
    }

    /// Number of parallel tracks this cluster needs.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    // A cluster's first placement always lands on track 0, so an empty
    // track 0 means nothing has been placed yet.
    fn is_empty(&self) -> bool {
        self.tracks[0].is_empty()
    }

    /// Lowest track whose placed segments all clear `segment`, growing the
    /// track list when every existing track has a collision.
    fn first_free_track(&mut self, segment: &DaySegment) -> usize {
        for (idx, track) in self.tracks.iter().enumerate() {
            if track.iter().all(|placed| !overlaps(placed, segment)) {
                return idx;
            }
        }
        self.tracks.push(Vec::new());
        self.tracks.len() - 1
    }

    /// Does `segment` collide with anything placed beyond track 0?
    fn reaches_past_track_zero(&self, segment: &DaySegment) -> bool {
        self.tracks
            .iter()
            .skip(1)
            .any(|track| track.iter().any(|placed| overlaps(placed, segment)))
    }
}

/// Where a segment landed: indexes into [`Assignment::clusters`] and into
/// that cluster's track list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackPosition {
    pub cluster: usize,
    pub track: usize,
}

/// Placement of every tracked segment of one day, handed to the geometry
/// layer. Positions are plain index pairs into the cluster arena; nothing
/// points back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    clusters: Vec<Cluster>,
    positions: HashMap<i64, TrackPosition>,
}

impl Assignment {
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Placement of the segment owned by `event_id`, if one was assigned.
    pub fn position(&self, event_id: i64) -> Option<TrackPosition> {
        self.positions.get(&event_id).copied()
    }

    /// Track count of the cluster containing `event_id`'s segment.
    pub fn track_count(&self, event_id: i64) -> Option<usize> {
        self.position(event_id)
            .map(|pos| self.clusters[pos.cluster].track_count())
    }

    /// Number of segments placed.
    pub fn segment_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Assign each segment of one day to a cluster and track.
///
/// Segments must arrive in [`super::ordering::order`] sequence; the greedy
/// scan relies on starts never decreasing. Total over any well-formed
/// input: a day with no segments yields no clusters.
pub fn assign(ordered: Vec<DaySegment>) -> Assignment {
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut positions = HashMap::with_capacity(ordered.len());

    for segment in ordered {
        if clusters.is_empty() {
            clusters.push(Cluster::seeded_by(&segment));
        }

        let current = clusters.len() - 1;
        let free_track = clusters[current].first_free_track(&segment);

        let (target, track) = if free_track == 0
            && !clusters[current].is_empty()
            && !clusters[current].reaches_past_track_zero(&segment)
        {
            // Track 0 is free and no deeper track reaches this segment
            // either: it is disconnected from the running cluster and
            // seeds a new one.
            clusters.push(Cluster::seeded_by(&segment));
            (clusters.len() - 1, 0)
        } else {
            // Either a plain placement, or free_track == 0 with a deeper
            // sibling keeping the segment linked to the running cluster.
            (current, free_track)
        };

        positions.insert(
            segment.event_id,
            TrackPosition {
                cluster: target,
                track,
            },
        );
        clusters[target].tracks[track].push(segment);
    }

    Assignment { clusters, positions }
}
