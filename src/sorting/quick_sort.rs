/// In-place quicksort with a last-element pivot (Lomuto partition).
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let pivot = partition(arr);
    let (left, right) = arr.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let pivot = arr.len() - 1;
    let mut boundary = 0;
    for i in 0..pivot {
        if arr[i] <= arr[pivot] {
            arr.swap(boundary, i);
            boundary += 1;
        }
    }
    arr.swap(boundary, pivot);
    boundary
}
