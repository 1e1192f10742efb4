/// Binary search for `target` in a matrix whose rows are sorted and whose
/// first entry of each row exceeds the last entry of the previous row. The
/// matrix is addressed as one flat sorted sequence, O(log(rows * cols)).
pub fn matrix_search(matrix: &[Vec<i64>], target: i64) -> bool {
    let rows = matrix.len();
    if rows == 0 || matrix[0].is_empty() {
        return false;
    }
    let cols = matrix[0].len();

    let mut low = 0;
    let mut high = rows * cols - 1;
    while low <= high {
        let mid = low + (high - low) / 2;
        let value = matrix[mid / cols][mid % cols];
        if value == target {
            return true;
        } else if value < target {
            low = mid + 1;
        } else if mid == 0 {
            return false;
        } else {
            high = mid - 1;
        }
    }
    false
}
