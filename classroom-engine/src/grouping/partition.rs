//! Roster partitioning into random groups

use super::shuffle::shuffle;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Group, GroupingMode, Person};

/// Partition a roster according to the given grouping mode.
///
/// Every call shuffles internally, so "shuffle again" is a plain
/// re-invocation with the same arguments.
pub fn partition(people: &[Person], mode: GroupingMode) -> AppResult<Vec<Group>> {
    match mode {
        GroupingMode::ByCount(count) => partition_by_count(people, count),
        GroupingMode::BySize(size) => partition_by_size(people, size),
    }
}

/// Split a roster into `group_count` random groups.
///
/// The effective count is capped at the roster size (at least one person
/// per group). Sizes differ by at most one: the first `n mod k` groups
/// take the extra member. An empty roster produces zero groups.
pub fn partition_by_count(people: &[Person], group_count: u32) -> AppResult<Vec<Group>> {
    if group_count == 0 {
        return Err(AppError::new(ErrorCode::GroupCountInvalid));
    }
    if people.is_empty() {
        return Ok(Vec::new());
    }

    let n = people.len();
    let k = (group_count as usize).min(n);
    let base = n / k;
    let remainder = n % k;

    let shuffled = shuffle(people);
    let mut groups = Vec::with_capacity(k);
    let mut offset = 0;
    for idx in 0..k {
        let len = if idx < remainder { base + 1 } else { base };
        groups.push(Group {
            id: idx as u32 + 1,
            members: shuffled[offset..offset + len].to_vec(),
        });
        offset += len;
    }

    tracing::debug!(people = n, groups = groups.len(), "partitioned roster by count");
    Ok(groups)
}

/// Split a roster into random groups of `group_size` members.
///
/// The final group may be smaller than `group_size`; it is neither padded
/// nor merged into the previous group.
pub fn partition_by_size(people: &[Person], group_size: u32) -> AppResult<Vec<Group>> {
    if group_size == 0 {
        return Err(AppError::new(ErrorCode::GroupSizeInvalid));
    }

    let shuffled = shuffle(people);
    let groups: Vec<Group> = shuffled
        .chunks(group_size as usize)
        .enumerate()
        .map(|(idx, chunk)| Group {
            id: idx as u32 + 1,
            members: chunk.to_vec(),
        })
        .collect();

    tracing::debug!(
        people = people.len(),
        groups = groups.len(),
        "partitioned roster by size"
    );
    Ok(groups)
}
