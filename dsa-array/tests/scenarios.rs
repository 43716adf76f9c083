use dsa_array::{DynamicArray, Error};

#[test]
fn test_append_doubles_when_limit_reached() {
    let mut arr = DynamicArray::with_capacity(2).unwrap();
    arr.append(1);
    arr.append(2);
    arr.append(3);
    assert_eq!(3, arr.size());
    assert_eq!(4, arr.capacity());
}

#[test]
fn test_append_string() {
    let mut arr = DynamicArray::with_capacity(2).unwrap();
    arr.append(String::from("Test"));
    assert_eq!(1, arr.size());
    assert_eq!("Test", arr.get(0).unwrap());
}

#[test]
fn test_get_after_growth() {
    let mut arr = DynamicArray::with_capacity(2).unwrap();
    arr.bulk_append([1, 2, 3]);
    assert_eq!(2, *arr.get(1).unwrap());
}

#[test]
fn test_remove_last() {
    let mut arr = DynamicArray::with_capacity(2).unwrap();
    arr.bulk_append([1, 2, 3]);
    assert_eq!(3, arr.remove(2).unwrap());
    assert_eq!(2, arr.size());
    assert_eq!(1, *arr.get(0).unwrap());
    assert_eq!(2, *arr.get(1).unwrap());
}

#[test]
fn test_get_out_of_bounds() {
    let mut arr = DynamicArray::with_capacity(2).unwrap();
    arr.bulk_append([1, 2, 3]);
    let err = arr.get(-2).unwrap_err();
    assert_eq!(Error::NegativeIndex(-2), err);
    assert!(err.is_invalid_argument());
    // slot 3 is allocated but not addressable.
    let err = arr.get(3).unwrap_err();
    assert_eq!(Error::IndexOutOfRange { index: 3, size: 3 }, err);
    let err = arr.get(4).unwrap_err();
    assert_eq!(Error::IndexOutOfRange { index: 4, size: 3 }, err);
    assert!(err.is_invalid_argument());
}

#[test]
fn test_negative_capacity() {
    for cap in [-5, -1, -100, -2, -999] {
        let err = DynamicArray::<i32>::with_capacity(cap).unwrap_err();
        assert_eq!(Error::InvalidCapacity(cap), err);
        assert!(err.is_invalid_argument());
    }
    let mut arr = DynamicArray::with_capacity(0).unwrap();
    arr.append(42u64);
    assert_eq!(42, *arr.get(0).unwrap());
}

#[test]
fn test_bounds_on_empty_array() {
    let mut arr = DynamicArray::<i32>::with_capacity(4).unwrap();
    assert!(arr.get(0).is_err());
    assert!(arr.get(-1).is_err());
    assert!(arr.remove(0).is_err());
    assert!(arr.remove(-1).is_err());
    assert_eq!(0, arr.size());
    assert_eq!(4, arr.capacity());
}
