//! The concrete diff algorithm: LCS matching, move extension, ordered dispatch.
//!
//! Any engine honoring the [`DiffCallback`] contract and the dispatch
//! convention documented on [`diff`] can replace this one; nothing in the
//! domain crates depends on the algorithm's internals.

use tracing::trace;

use crate::callback::DiffCallback;
use crate::ops::UpdateOp;

/// Compute the operation stream transforming the callback's old list into
/// its new list.
///
/// Applying the returned operations in order, each against the working list
/// produced by the previous one, yields the new list. Position semantics:
///
/// - `Remove` ops come first, highest position first, so their positions are
///   plain old-list indices; contiguous runs are coalesced into one op.
/// - `Move` ops follow; `from` is the item's position in the working list at
///   that point, `to` is the insertion index after the item was taken out.
/// - `Insert` ops come next in ascending order; positions are final
///   new-list indices, contiguous runs coalesced.
/// - `Change` ops come last, in ascending final new-list positions;
///   contiguous runs with equal payloads are coalesced.
///
/// Two lists with no identity matches therefore diff to one coalesced
/// `Remove` plus one coalesced `Insert`; in particular a fully-populated
/// list diffed against an empty one yields exactly
/// `Remove { position: 0, count: old_len }`.
pub fn diff<C>(callback: &C) -> Vec<UpdateOp<C::Payload>>
where
    C: DiffCallback,
    C::Payload: PartialEq,
{
    let old_len = callback.old_len();
    let new_len = callback.new_len();

    // Phase 1: longest common subsequence over identity. These pairs keep
    // their relative order and need no structural op.
    let pairs = lcs_pairs(callback, old_len, new_len);

    let mut old_partner = vec![None; old_len];
    let mut new_matched = vec![false; new_len];
    for &(i, j) in &pairs {
        old_partner[i] = Some(j);
        new_matched[j] = true;
    }

    // Phase 2: extend the matching with displaced items. An old item that
    // fell out of the LCS but has an identity twin on the new side becomes a
    // move instead of a remove+insert.
    for i in 0..old_len {
        if old_partner[i].is_some() {
            continue;
        }
        for j in 0..new_len {
            if !new_matched[j] && callback.same_identity(i, j) {
                old_partner[i] = Some(j);
                new_matched[j] = true;
                break;
            }
        }
    }

    let mut ops = Vec::new();

    // Phase 3a: removals, highest-first, contiguous runs coalesced.
    let mut run: Option<(usize, usize)> = None; // (start, count)
    for i in (0..old_len).rev() {
        if old_partner[i].is_some() {
            if let Some((start, count)) = run.take() {
                ops.push(UpdateOp::Remove {
                    position: start,
                    count,
                });
            }
        } else {
            run = Some(match run {
                Some((start, count)) if start == i + 1 => (i, count + 1),
                Some((start, count)) => {
                    ops.push(UpdateOp::Remove {
                        position: start,
                        count,
                    });
                    (i, 1)
                }
                None => (i, 1),
            });
        }
    }
    if let Some((start, count)) = run {
        ops.push(UpdateOp::Remove {
            position: start,
            count,
        });
    }

    // Phase 3b: moves. The working list now holds exactly the surviving old
    // items; reorder them into new-list relative order, keeping a longest
    // increasing subsequence stationary so the move count is minimal.
    let mut current: Vec<usize> = old_partner.iter().filter_map(|p| *p).collect();
    let stationary = stationary_mask(&current);
    let mut displaced: Vec<usize> = current
        .iter()
        .zip(&stationary)
        .filter(|(_, &keep)| !keep)
        .map(|(&target, _)| target)
        .collect();
    displaced.sort_unstable();
    for target in displaced {
        let Some(from) = current.iter().position(|&v| v == target) else {
            continue;
        };
        current.remove(from);
        let to = match current.iter().rposition(|&v| v < target) {
            Some(p) => p + 1,
            None => 0,
        };
        current.insert(to, target);
        if from != to {
            ops.push(UpdateOp::Move { from, to });
        }
    }

    // Phase 3c: insertions, ascending, contiguous runs coalesced. Positions
    // are final new-list indices; every earlier new index is already present
    // when a run is applied.
    let mut run: Option<(usize, usize)> = None;
    for j in 0..new_len {
        if new_matched[j] {
            if let Some((start, count)) = run.take() {
                ops.push(UpdateOp::Insert {
                    position: start,
                    count,
                });
            }
        } else if let Some((start, count)) = run {
            run = Some((start, count + 1));
        } else {
            run = Some((j, 1));
        }
    }
    if let Some((start, count)) = run {
        ops.push(UpdateOp::Insert {
            position: start,
            count,
        });
    }

    // Phase 3d: content changes for identity-matched pairs, ascending final
    // positions, equal-payload runs coalesced.
    let mut changed: Vec<(usize, usize)> = (0..old_len)
        .filter_map(|i| old_partner[i].map(|j| (j, i)))
        .filter(|&(j, i)| !callback.same_content(i, j))
        .collect();
    changed.sort_unstable();
    let mut idx = 0;
    while idx < changed.len() {
        let (start, first_old) = changed[idx];
        let payload = callback.change_payload(first_old, start);
        let mut count = 1;
        while let Some(&(j, i)) = changed.get(idx + count) {
            if j != start + count || callback.change_payload(i, j) != payload {
                break;
            }
            count += 1;
        }
        ops.push(UpdateOp::Change {
            position: start,
            count,
            payload,
        });
        idx += count;
    }

    trace!(old_len, new_len, ops = ops.len(), "computed list diff");
    ops
}

/// Longest common subsequence over `same_identity`, returned as ascending
/// `(old_index, new_index)` pairs.
fn lcs_pairs<C: DiffCallback>(callback: &C, old_len: usize, new_len: usize) -> Vec<(usize, usize)> {
    let width = new_len + 1;
    let mut table = vec![0u32; (old_len + 1) * width];
    for i in (0..old_len).rev() {
        for j in (0..new_len).rev() {
            table[i * width + j] = if callback.same_identity(i, j) {
                table[(i + 1) * width + j + 1] + 1
            } else {
                table[(i + 1) * width + j].max(table[i * width + j + 1])
            };
        }
    }

    let mut pairs = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < old_len && j < new_len {
        if callback.same_identity(i, j)
            && table[i * width + j] == table[(i + 1) * width + j + 1] + 1
        {
            pairs.push((i, j));
            i += 1;
            j += 1;
        } else if table[(i + 1) * width + j] >= table[i * width + j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    pairs
}

/// Mark a longest increasing subsequence of `values`: the marked items can
/// stay put while every unmarked item is relocated with one move.
fn stationary_mask(values: &[usize]) -> Vec<bool> {
    let len = values.len();
    let mut mask = vec![false; len];
    if len == 0 {
        return mask;
    }

    let mut best = vec![1usize; len];
    let mut prev = vec![usize::MAX; len];
    let mut end = 0;
    for i in 0..len {
        for j in 0..i {
            if values[j] < values[i] && best[j] + 1 > best[i] {
                best[i] = best[j] + 1;
                prev[i] = j;
            }
        }
        if best[i] > best[end] {
            end = i;
        }
    }

    let mut i = end;
    loop {
        mask[i] = true;
        if prev[i] == usize::MAX {
            break;
        }
        i = prev[i];
    }
    mask
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
