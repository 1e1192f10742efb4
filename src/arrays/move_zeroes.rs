/// Move every zero to the end in-place, keeping the relative order of the
/// non-zero elements.
pub fn move_zeroes(nums: &mut [i64]) {
    let mut write = 0;
    for read in 0..nums.len() {
        if nums[read] != 0 {
            nums.swap(write, read);
            write += 1;
        }
    }
}
