pub mod reverse_digits;
