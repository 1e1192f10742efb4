/// Three-way partition of a slice of 0s, 1s and 2s (Dutch national flag),
/// single pass, no extra space.
pub fn dutch_flag(arr: &mut [u8]) {
    let mut low = 0;
    let mut mid = 0;
    let mut high = arr.len();

    while mid < high {
        match arr[mid] {
            0 => {
                arr.swap(low, mid);
                low += 1;
                mid += 1;
            }
            1 => mid += 1,
            _ => {
                high -= 1;
                arr.swap(mid, high);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_mixed_input() {
        let mut arr = [2, 0, 2, 1, 1, 0];
        dutch_flag(&mut arr);
        assert_eq!(arr, [0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn single_colour_inputs() {
        let mut zeros = [0, 0, 0];
        dutch_flag(&mut zeros);
        assert_eq!(zeros, [0, 0, 0]);

        let mut twos = [2, 2];
        dutch_flag(&mut twos);
        assert_eq!(twos, [2, 2]);
    }

    #[test]
    fn empty_input() {
        dutch_flag(&mut []);
    }
}
