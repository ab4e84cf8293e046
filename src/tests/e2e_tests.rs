use crate::snapshot::decode::unpack;
use crate::snapshot::encode::pack;
use crate::snapshot::Snapshot;
use std::thread;

#[test]
fn test_pack_copies_inputs() {
    let mut state = b"state v1".to_vec();
    let mut event_log = b"log v1".to_vec();
    let packed = pack(&state, &event_log).unwrap();

    state.iter_mut().for_each(|b| *b = 0);
    event_log.clear();

    let (s, e) = unpack(&packed).unwrap();
    assert_eq!(s, b"state v1");
    assert_eq!(e, b"log v1");
}

#[test]
fn test_unpack_outputs_independent_of_container() {
    let mut packed = pack(b"abc", b"xyz").unwrap();
    let (s, e) = unpack(&packed).unwrap();

    packed.iter_mut().for_each(|b| *b = 0xFF);

    assert_eq!(s, b"abc");
    assert_eq!(e, b"xyz");
}

#[test]
fn test_save_restore_cycle() {
    // Simulates a database snapshotting, restoring, appending and snapshotting again.
    let first = Snapshot::new(b"{\"links\":1}".to_vec(), b"evt:add#1\n".to_vec());
    let blob = first.pack().unwrap();

    let mut restored = Snapshot::unpack(&blob).unwrap();
    assert_eq!(restored, first);

    restored.state = b"{\"links\":2}".to_vec();
    restored.event_log.extend_from_slice(b"evt:add#2\n");
    let blob2 = restored.pack().unwrap();

    let second = Snapshot::unpack(&blob2).unwrap();
    assert_eq!(second.event_log, b"evt:add#1\nevt:add#2\n");
    assert_ne!(blob, blob2);
}

#[test]
fn test_concurrent_pack_unpack() {
    let handles: Vec<_> = (0u8..8)
        .map(|i| {
            thread::spawn(move || {
                let state = vec![i; 1000 + i as usize];
                let event_log = vec![i.wrapping_mul(3); 17 * i as usize];
                let packed = pack(&state, &event_log).unwrap();
                let (s, e) = unpack(&packed).unwrap();
                assert_eq!(s, state);
                assert_eq!(e, event_log);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
