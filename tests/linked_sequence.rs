use orx_linked_sequence::*;
use test_case::test_case;

fn to_str(numbers: &[usize]) -> Vec<String> {
    numbers.iter().map(|x| x.to_string()).collect()
}

fn forward<S: SplicePolicy>(seq: &LinkedSequence<String, S>) -> Vec<String> {
    let vec: Vec<_> = seq.iter().cloned().collect();
    assert_eq!(vec.len(), seq.len());
    assert_eq!(vec.is_empty(), seq.is_empty());
    vec
}

fn seq_of(numbers: &[usize]) -> LinkedSequence<String> {
    to_str(numbers).into_iter().collect()
}

#[test]
fn new_seq() {
    let seq = LinkedSequence::<String>::new();

    assert_eq!(seq.len(), 0);
    assert!(seq.is_empty());
    assert!(!seq.is_read_only());
    assert_eq!(seq.front(), None);

    assert_eq!(forward(&seq), to_str(&[]));
}

#[test_case(0)]
#[test_case(1)]
#[test_case(2)]
#[test_case(16)]
#[test_case(987)]
fn add_keeps_insertion_order(n: usize) {
    let mut seq = LinkedSequence::new();
    for i in 0..n {
        seq.add(i.to_string());
        assert_eq!(seq.len(), i + 1);
    }

    for i in 0..n {
        assert_eq!(seq.get(i), Ok(&i.to_string()));
    }

    let expected: Vec<_> = (0..n).collect();
    assert_eq!(forward(&seq), to_str(&expected));
}

#[test_case(&[])]
#[test_case(&[7])]
#[test_case(&[1, 2, 3])]
#[test_case(&[5, 5, 5, 5])]
fn constructed_len_equals_num_elements(numbers: &[usize]) {
    let seq = seq_of(numbers);
    assert_eq!(seq.len(), numbers.len());

    let seq = LinkedSequence::from(to_str(numbers));
    assert_eq!(seq.len(), numbers.len());

    assert_eq!(forward(&seq), to_str(numbers));
}

#[test]
fn variadic_construction() {
    let seq = linked_seq![0.to_string(), 1.to_string(), 2.to_string()];
    assert_eq!(forward(&seq), to_str(&[0, 1, 2]));
}

#[test_case(&[1], 1)]
#[test_case(&[1, 2, 3], 3)]
#[test_case(&[1, 2, 3], 4)]
#[test_case(&[], 0)]
fn get_out_of_range(numbers: &[usize], index: usize) {
    let mut seq = seq_of(numbers);
    let error = SequenceError::IndexOutOfRange {
        index,
        len: numbers.len(),
    };

    assert_eq!(seq.get(index), Err(error));
    assert_eq!(seq.get_mut(index).map(|x| x.clone()), Err(error));
    assert_eq!(seq.set(index, 42.to_string()), Err(error));
    assert_eq!(forward(&seq), to_str(numbers));
}

#[test]
fn set_replaces_in_place() {
    let mut seq = seq_of(&[0, 1, 2]);

    assert_eq!(seq.set(1, 42.to_string()), Ok(1.to_string()));
    assert_eq!(seq.len(), 3);
    assert_eq!(forward(&seq), to_str(&[0, 42, 2]));

    assert_eq!(seq.set(0, 7.to_string()), Ok(0.to_string()));
    assert_eq!(seq.set(2, 9.to_string()), Ok(2.to_string()));
    assert_eq!(forward(&seq), to_str(&[7, 42, 9]));
}

#[test]
fn get_mut() {
    let mut seq = seq_of(&[0, 1, 2]);
    seq.get_mut(2).expect("within range").push('0');
    *seq.front_mut().expect("non-empty") = 10.to_string();
    assert_eq!(forward(&seq), to_str(&[10, 1, 20]));
}

#[test_case(0)]
#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
#[test_case(4)]
fn insert_before(index: usize) {
    let mut seq = seq_of(&[0, 1, 2, 3]);
    seq.insert(index, 42.to_string()).expect("within range");

    let mut expected = to_str(&[0, 1, 2, 3]);
    expected.insert(index, 42.to_string());

    assert_eq!(seq.len(), 5);
    assert_eq!(seq.get(index), Ok(&42.to_string()));
    assert_eq!(forward(&seq), expected);
}

#[test]
fn insert_front_of_empty_and_single() {
    let mut seq = LinkedSequence::new();
    seq.insert(0, 1.to_string()).expect("within range");
    assert_eq!(forward(&seq), to_str(&[1]));

    seq.insert(1, 2.to_string()).expect("within range");
    seq.insert(0, 0.to_string()).expect("within range");
    assert_eq!(forward(&seq), to_str(&[0, 1, 2]));
}

#[test_case(&[], 1)]
#[test_case(&[1, 2, 3], 4)]
#[test_case(&[1, 2, 3], 100)]
fn insert_out_of_range(numbers: &[usize], index: usize) {
    let mut seq = seq_of(numbers);
    assert_eq!(
        seq.insert(index, 42.to_string()),
        Err(SequenceError::IndexOutOfRange {
            index,
            len: numbers.len()
        })
    );
    assert_eq!(forward(&seq), to_str(numbers));
}

#[test_case(0)]
#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
fn remove_at(index: usize) {
    let mut seq = seq_of(&[0, 1, 2, 3]);
    assert_eq!(seq.remove_at(index), Ok(index.to_string()));

    let mut expected = to_str(&[0, 1, 2, 3]);
    expected.remove(index);
    assert_eq!(forward(&seq), expected);
}

#[test]
fn remove_at_front_shifts_second() {
    let mut seq = seq_of(&[5, 6, 7]);
    let second = seq.get(1).cloned();

    _ = seq.remove_at(0);
    assert_eq!(seq.get(0).cloned(), second);
}

#[test]
fn remove_at_last_until_empty() {
    let mut seq = seq_of(&[0, 1, 2]);

    assert_eq!(seq.remove_at(2), Ok(2.to_string()));
    assert_eq!(seq.remove_at(1), Ok(1.to_string()));
    assert_eq!(seq.remove_at(0), Ok(0.to_string()));
    assert!(seq.is_empty());

    assert_eq!(
        seq.remove_at(0),
        Err(SequenceError::IndexOutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn remove_at_len() {
    let mut seq = seq_of(&[0, 1]);
    assert_eq!(
        seq.remove_at(2),
        Err(SequenceError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(forward(&seq), to_str(&[0, 1]));
}

#[test]
fn contains_and_index_of() {
    let seq = seq_of(&[3, 1, 4, 1, 5]);

    for x in [3, 1, 4, 5] {
        assert!(seq.contains(&x.to_string()));
        let index = seq.index_of(&x.to_string()).expect("is-some");
        assert_eq!(seq.get(index), Ok(&x.to_string()));
    }

    assert_eq!(seq.index_of(&1.to_string()), Some(1));

    assert!(!seq.contains(&9.to_string()));
    assert_eq!(seq.index_of(&9.to_string()), None);
}

#[test]
fn index_of_none_iff_not_contains() {
    let seq = seq_of(&[0, 2, 4, 6]);
    for x in 0..8 {
        let x = x.to_string();
        assert_eq!(seq.index_of(&x).is_none(), !seq.contains(&x));
    }
}

#[test]
fn clear() {
    let mut seq = seq_of(&[0, 1, 2]);
    seq.clear();

    assert_eq!(seq.len(), 0);
    for x in 0..3 {
        assert!(!seq.contains(&x.to_string()));
    }
    assert_eq!(forward(&seq), to_str(&[]));

    seq.add(5.to_string());
    assert_eq!(forward(&seq), to_str(&[5]));
}

#[test]
fn push_front_pop_front() {
    let mut seq = LinkedSequence::new();
    seq.push_front(0.to_string());
    seq.push_front(1.to_string());
    seq.push_front(2.to_string());
    assert_eq!(forward(&seq), to_str(&[2, 1, 0]));

    assert_eq!(seq.pop_front(), Some(2.to_string()));
    assert_eq!(forward(&seq), to_str(&[1, 0]));

    assert_eq!(seq.pop_front(), Some(1.to_string()));
    assert_eq!(seq.pop_front(), Some(0.to_string()));
    assert_eq!(seq.pop_front(), None);
    assert_eq!(forward(&seq), to_str(&[]));
}

#[test]
fn copy_to_same_size() {
    let seq = seq_of(&[0, 1, 2]);
    let mut buffer = vec![String::new(); 3];

    seq.copy_to(&mut buffer, 0).expect("enough capacity");
    assert_eq!(buffer, to_str(&[0, 1, 2]));
}

#[test]
fn copy_to_with_offset() {
    let seq = linked_seq![1, 2];
    let mut buffer = [0; 4];

    seq.copy_to(&mut buffer, 2).expect("enough capacity");
    assert_eq!(buffer, [0, 0, 1, 2]);
}

#[test_case(3, 0, 2)]
#[test_case(3, 1, 3)]
#[test_case(2, 3, 4)]
fn copy_to_insufficient_capacity(len: usize, start_offset: usize, buffer_len: usize) {
    let seq: LinkedSequence<usize> = (0..len).collect();
    let mut buffer = vec![42; buffer_len];

    assert_eq!(
        seq.copy_to(&mut buffer, start_offset),
        Err(SequenceError::InsufficientCapacity {
            required: start_offset + len,
            available: buffer_len,
        })
    );
    assert!(buffer.iter().all(|x| *x == 42));
}

#[test]
fn copy_empty_to_empty() {
    let seq = LinkedSequence::<char>::new();
    let mut buffer: [char; 0] = [];
    assert_eq!(seq.copy_to(&mut buffer, 0), Ok(()));
}

#[test_case(&[], 0)]
#[test_case(&[1], 1)]
#[test_case(&[1, 2, 3], 3)]
#[test_case(&[1, 2, 3], 1_000_000)]
fn get_past_the_end(numbers: &[usize], index: usize) {
    let seq = seq_of(numbers);
    assert_eq!(
        seq.get(index),
        Err(SequenceError::IndexOutOfRange {
            index,
            len: numbers.len()
        })
    );
}

#[test]
fn get_past_the_end_of_long_sequence() {
    let seq: LinkedSequence<usize> = (0..100_000).collect();
    for index in [100_000, 100_001, usize::MAX] {
        assert_eq!(
            seq.get(index),
            Err(SequenceError::IndexOutOfRange { index, len: 100_000 })
        );
    }
    assert_eq!(seq.get(99_999), Ok(&99_999));
}

#[test]
fn drop_one_million_elements() {
    let mut seq = LinkedSequence::new();
    for i in 0..1_000_000 {
        seq.push_front(i);
    }
    assert_eq!(seq.len(), 1_000_000);
    drop(seq);

    let seq: LinkedSequence<usize, Truncate> = (0..1_000_000).collect();
    assert_eq!(seq.len(), 1_000_000);
    drop(seq);
}

#[test]
fn splice_policy_is_kept() {
    let seq = LinkedSequence::<usize>::new();
    assert_eq!(seq.splice_policy(), &Relink);

    let seq = LinkedSequence::<usize, _>::with_splice_policy(Truncate);
    assert_eq!(seq.splice_policy(), &Truncate);
    assert_eq!(seq.clone().splice_policy(), &Truncate);

    let seq: LinkedSequence<usize> = seq.into();
    assert_eq!(seq.splice_policy(), &Relink);
}

#[test]
fn iterate_is_restartable() {
    let seq = seq_of(&[0, 1, 2]);

    let mut iter = seq.iter();
    assert_eq!(iter.next(), Some(&0.to_string()));

    let all: Vec<_> = seq.iter().cloned().collect();
    assert_eq!(all, to_str(&[0, 1, 2]));

    let rest: Vec<_> = iter.cloned().collect();
    assert_eq!(rest, to_str(&[1, 2]));
}

#[test]
fn error_as_dyn_error() {
    fn second(seq: &LinkedSequence<i32>) -> Result<i32, Box<dyn std::error::Error>> {
        Ok(*seq.get(1)?)
    }

    assert_eq!(second(&linked_seq![1, 2]).ok(), Some(2));

    let error = second(&linked_seq![1]).expect_err("out of range");
    assert_eq!(
        error.to_string(),
        "IndexOutOfRange => Index 1 is out of range for the sequence of length 1."
    );
}
