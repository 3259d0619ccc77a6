use crate::Node;

/// Rebuild the path `start ..= dest` from a predecessor table.
///
/// Walks back from `dest` through `came_from` until `start` is reached, then
/// reverses. Returns `[start]` when `start == dest`, and an empty path when
/// `dest` has no recorded predecessor chain back to `start`. The walk is
/// bounded by the table length, so a corrupted (cyclic) table yields an
/// empty path instead of looping.
pub fn create_path(start: Node, dest: Node, came_from: &[Option<Node>]) -> Vec<Node> {
    if start == dest {
        return vec![start];
    }
    let mut path = vec![dest];
    let mut current = dest;
    for _ in 0..came_from.len() {
        let Some(&Some(prev)) = came_from.get(current) else {
            return Vec::new();
        };
        path.push(prev);
        if prev == start {
            path.reverse();
            return path;
        }
        current = prev;
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_equals_dest() {
        assert_eq!(create_path(3, 3, &[None; 4]), vec![3]);
    }

    #[test]
    fn follows_chain() {
        // 0 -> 3 -> 6
        let mut came_from = vec![None; 8];
        came_from[3] = Some(0);
        came_from[6] = Some(3);
        came_from[1] = Some(0);
        assert_eq!(create_path(0, 6, &came_from), vec![0, 3, 6]);
        assert_eq!(create_path(0, 1, &came_from), vec![0, 1]);
    }

    #[test]
    fn unreached_dest_is_empty() {
        let mut came_from = vec![None; 4];
        came_from[1] = Some(0);
        assert!(create_path(0, 2, &came_from).is_empty());
        assert!(create_path(0, 9, &came_from).is_empty());
    }

    #[test]
    fn chain_not_leading_to_start_is_empty() {
        let mut came_from = vec![None; 4];
        came_from[2] = Some(1);
        assert!(create_path(0, 2, &came_from).is_empty());
    }

    #[test]
    fn cycle_terminates() {
        let came_from = vec![None, Some(2), Some(1)];
        assert!(create_path(0, 1, &came_from).is_empty());
    }
}
