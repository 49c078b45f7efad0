//! Unit tests for the attribute store

use super::*;
use crate::error::Error;
use proptest::prelude::*;

fn sample_store() -> AttributeStore {
    AttributeStore::new(vec![
        AttributeRecord::with_value(0x0003, b"Find Me"),
        AttributeRecord::new(0x0008, 1),
        AttributeRecord::with_value(0x0010, &[1, 2, 3, 4, 5, 6, 7, 8]),
    ])
    .unwrap()
}

#[test]
fn test_lookup() {
    let store = sample_store();

    let record = store.lookup(0x0003).unwrap();
    assert_eq!(record.handle(), 0x0003);
    assert_eq!(record.capacity(), 7);
    assert_eq!(record.value(), b"Find Me");

    assert!(store.lookup(0x0004).is_none());
    assert_eq!(store.len(), 3);
}

#[test]
fn test_duplicate_handle_rejected() {
    let result = AttributeStore::new(vec![
        AttributeRecord::new(0x0008, 1),
        AttributeRecord::new(0x0009, 2),
        AttributeRecord::new(0x0008, 4),
    ]);

    assert_eq!(result.unwrap_err(), Error::DuplicateHandle(0x0008));
}

#[test]
fn test_read_full_value() {
    let store = sample_store();
    assert_eq!(store.read(0x0003, 0, 7).unwrap(), b"Find Me");
}

#[test]
fn test_read_truncates_to_capacity() {
    let store = sample_store();

    // Asking for more than is left returns what is left
    assert_eq!(store.read(0x0010, 5, 100).unwrap(), &[6, 7, 8]);
    assert_eq!(store.read(0x0010, 0, 3).unwrap(), &[1, 2, 3]);
}

#[test]
fn test_read_invalid_handle() {
    let store = sample_store();
    let err = store.read(0x0042, 0, 1).unwrap_err();

    assert_eq!(err, AttError::InvalidHandle(0x0042));
    assert_eq!(err.code(), AttErrorCode::InvalidHandle);
    assert_eq!(err.handle(), Some(0x0042));
}

#[test]
fn test_read_offset_at_capacity_is_invalid() {
    let store = sample_store();

    let err = store.read(0x0008, 1, 1).unwrap_err();
    assert_eq!(err.code(), AttErrorCode::InvalidOffset);

    let err = store.read(0x0010, 9, 1).unwrap_err();
    assert_eq!(
        err,
        AttError::InvalidOffset {
            handle: 0x0010,
            offset: 9,
            capacity: 8
        }
    );
}

#[test]
fn test_read_into_buffer() {
    let store = sample_store();
    let mut buf = [0u8; 4];

    let len = store.read_into(0x0010, 6, &mut buf).unwrap();
    assert_eq!(len, 2);
    assert_eq!(&buf[..len], &[7, 8]);
}

#[test]
fn test_write_and_read_back() {
    let mut store = sample_store();

    store.write(0x0008, 0, &[0x02]).unwrap();
    assert_eq!(store.read(0x0008, 0, 1).unwrap(), &[0x02]);
    assert_eq!(store.lookup(0x0008).unwrap().len(), 1);
}

#[test]
fn test_write_at_offset_sets_length() {
    let mut store = sample_store();

    store.write(0x0010, 2, &[0xAA, 0xBB]).unwrap();
    let record = store.lookup(0x0010).unwrap();
    assert_eq!(record.len(), 4);
    assert_eq!(record.value(), &[1, 2, 0xAA, 0xBB]);
    assert_eq!(store.read(0x0010, 0, 8).unwrap(), &[1, 2, 0xAA, 0xBB, 5, 6, 7, 8]);
}

#[test]
fn test_write_overflow_rejected() {
    let mut store = sample_store();
    store.write(0x0008, 0, &[0x02]).unwrap();

    let err = store.write(0x0008, 0, &[0x01, 0x02]).unwrap_err();
    assert_eq!(err.code(), AttErrorCode::InvalidAttributeValueLength);
    assert_eq!(store.read(0x0008, 0, 1).unwrap(), &[0x02]);

    // Offset past the end, even with an empty value
    let err = store.write(0x0008, 2, &[]).unwrap_err();
    assert_eq!(err.code(), AttErrorCode::InvalidAttributeValueLength);
}

#[test]
fn test_write_invalid_handle() {
    let mut store = sample_store();
    let err = store.write(0x0042, 0, &[1]).unwrap_err();
    assert_eq!(err, AttError::InvalidHandle(0x0042));
}

#[test]
fn test_descriptors() {
    let store = sample_store();
    let table = store.descriptors();

    assert_eq!(
        table,
        vec![
            AttributeDescriptor { handle: 0x0003, capacity: 7 },
            AttributeDescriptor { handle: 0x0008, capacity: 1 },
            AttributeDescriptor { handle: 0x0010, capacity: 8 },
        ]
    );
}

#[test]
fn test_error_code_conversion() {
    assert_eq!(u8::from(AttErrorCode::InvalidHandle), ATT_ERROR_INVALID_HANDLE);
    assert_eq!(u8::from(AttErrorCode::InvalidOffset), ATT_ERROR_INVALID_OFFSET);
    assert_eq!(
        u8::from(AttErrorCode::InvalidAttributeValueLength),
        ATT_ERROR_INVALID_ATTRIBUTE_VALUE_LENGTH
    );
    assert_eq!(u8::from(AttErrorCode::GattError), GATT_ERROR);
    assert_eq!(AttErrorCode::from(0x85), AttErrorCode::GattError);
    assert_eq!(AttErrorCode::from(0x42), AttErrorCode::Unknown(0x42));

    assert_eq!(AttError::MissingEventData.code(), AttErrorCode::GattError);
    assert_eq!(
        AttError::RequestNotSupported("execute write").code(),
        AttErrorCode::GattError
    );
}

proptest! {
    #[test]
    fn prop_read_returns_clamped_slice(
        data in prop::collection::vec(any::<u8>(), 1..64),
        offset in 0u16..80,
        requested in 0usize..100,
    ) {
        let store = AttributeStore::new(vec![AttributeRecord::with_value(0x0020, &data)]).unwrap();
        let capacity = data.len();
        let result = store.read(0x0020, offset, requested);

        if (offset as usize) < capacity {
            let start = offset as usize;
            let expected_len = requested.min(capacity - start);
            prop_assert_eq!(result.unwrap(), &data[start..start + expected_len]);
        } else {
            prop_assert_eq!(result.unwrap_err().code(), AttErrorCode::InvalidOffset);
        }
    }

    #[test]
    fn prop_write_succeeds_iff_value_fits(
        capacity in 1usize..32,
        offset in 0u16..40,
        value in prop::collection::vec(any::<u8>(), 0..40),
    ) {
        let initial: Vec<u8> = (0..capacity as u8).collect();
        let mut store = AttributeStore::new(vec![AttributeRecord::with_value(0x0020, &initial)]).unwrap();
        let result = store.write(0x0020, offset, &value);
        let fits = offset as usize + value.len() <= capacity;

        prop_assert_eq!(result.is_ok(), fits);

        let stored = store.read(0x0020, 0, capacity).unwrap().to_vec();
        if fits {
            let start = offset as usize;
            prop_assert_eq!(&stored[start..start + value.len()], &value[..]);
            prop_assert_eq!(&stored[..start], &initial[..start]);
        } else {
            prop_assert_eq!(result.unwrap_err().code(), AttErrorCode::InvalidAttributeValueLength);
            prop_assert_eq!(stored, initial);
        }
    }

    #[test]
    fn prop_unknown_handle_is_invalid(handle in any::<u16>()) {
        prop_assume!(handle != 0x0003 && handle != 0x0008 && handle != 0x0010);
        let mut store = sample_store();

        prop_assert_eq!(store.read(handle, 0, 1).unwrap_err(), AttError::InvalidHandle(handle));
        prop_assert_eq!(store.write(handle, 0, &[0]).unwrap_err(), AttError::InvalidHandle(handle));
    }
}
