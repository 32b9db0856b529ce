//! Integration tests for the fixed scenarios both containers must pass.

use dynarray::{DynArray, Error, RawDynArray, Search};

/// Record with a size that is not a power of two.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Book {
    title: [u8; 50],
    author: [u8; 50],
    subject: [u8; 100],
    book_id: i32,
}

impl Book {
    fn new(title: &str, author: &str, subject: &str, book_id: i32) -> Self {
        fn field<const N: usize>(s: &str) -> [u8; N] {
            let mut out = [0u8; N];
            out[..s.len()].copy_from_slice(s.as_bytes());
            out
        }
        Self {
            title: field(title),
            author: field(author),
            subject: field(subject),
            book_id,
        }
    }

    fn to_bytes(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(204);
        out.extend_from_slice(&self.title);
        out.extend_from_slice(&self.author);
        out.extend_from_slice(&self.subject);
        out.extend_from_slice(&self.book_id.to_ne_bytes());
        out
    }

    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            title: bytes[..50].try_into().unwrap(),
            author: bytes[50..100].try_into().unwrap(),
            subject: bytes[100..200].try_into().unwrap(),
            book_id: i32::from_ne_bytes(bytes[200..204].try_into().unwrap()),
        }
    }
}

#[test]
fn test_front_insertion_scenario() {
    let mut typed = DynArray::new();
    let mut raw = RawDynArray::empty(4);
    for v in [1i32, 2, 3] {
        typed.insert(0, v).unwrap();
        raw.insert(0, &v.to_ne_bytes()).unwrap();
    }

    assert_eq!(typed.as_slice(), &[3, 2, 1]);
    assert_eq!((typed.len(), typed.capacity()), (3, 4));

    let expected: Vec<u8> = [3i32, 2, 1].iter().flat_map(|v| v.to_ne_bytes()).collect();
    assert_eq!(raw.as_bytes(), expected.as_slice());
    assert_eq!((raw.len(), raw.capacity()), (3, 4));
}

#[test]
fn test_deletion_scenario() {
    let mut typed = DynArray::from_slice(&[1, 2, 3, 4, 5]).unwrap();
    typed.remove(0).unwrap();
    typed.remove(3).unwrap();
    assert_eq!(typed.remove(4), Err(Error::IndexOutOfRange { index: 4, len: 3 }));
    assert_eq!(typed.as_slice(), &[2, 3, 4]);
    assert_eq!(typed.len(), 3);
    assert_eq!(typed.capacity(), 5);
}

#[test]
fn test_struct_round_trip() {
    let book = Book::new("Algorithms", "Robert Sedgewick", "Computer Programming", 1);
    let size = std::mem::size_of::<Book>();
    assert_eq!(size, 204);

    let mut arr = RawDynArray::new(1, size).unwrap();
    arr.set(0, &book.to_bytes()).unwrap();

    let mut out = vec![0u8; size];
    arr.get(0, &mut out).unwrap();
    assert_eq!(Book::from_bytes(&out), book);
}

#[test]
fn test_struct_insert_round_trip() {
    let books = [
        Book::new("Algorithms", "Robert Sedgewick", "Computer Programming", 1),
        Book::new("The C++ Programming Language", "Bjarne Stroustrup", "Languages", 2),
        Book::new("Compilers", "Alfred Aho", "Language Translation", 3),
    ];
    let mut arr = RawDynArray::empty(std::mem::size_of::<Book>());
    for book in books {
        arr.insert(0, &book.to_bytes()).unwrap();
    }
    assert_eq!(arr.capacity(), 4);
    for (i, book) in books.iter().rev().enumerate() {
        assert_eq!(Book::from_bytes(arr.element(i).unwrap()), *book);
    }
}

#[test]
fn test_odd_sizes_round_trip() {
    for size in [1usize, 3, 5, 7, 13] {
        let mut arr = RawDynArray::empty(size);
        let blocks: Vec<Vec<u8>> = (0..6u8).map(|k| vec![k.wrapping_mul(31); size]).collect();
        for block in &blocks {
            arr.push(block).unwrap();
        }
        arr.delete(2).unwrap();
        let mut out = vec![0u8; size];
        for (i, expected) in blocks.iter().enumerate().filter(|(k, _)| *k != 2).enumerate() {
            arr.get(i, &mut out).unwrap();
            assert_eq!(&out, expected.1, "size {size} index {i}");
        }
    }
}

#[test]
fn test_search_is_typed_only() {
    let arr = DynArray::from_slice(&["a", "b", "a"]).unwrap();
    assert_eq!(arr.index_of(&"a"), Some(0));
    assert_eq!(arr.index_of(&"c"), None);
    assert!(arr.contains(&"b"));
}
