use crate::{
    test::usecase::{random_content, UseCase},
    HasHash, Input, InputFactory, E,
};
use sha2::{Digest, Sha256};
use std::{io::Read, sync::Barrier, thread};

const THREADS: usize = 8;

#[test]
fn shared_in_memory_input() -> Result<(), E> {
    let content = random_content(50_000);
    let input = InputFactory::new().read_bytes(&content, "shared")?;
    thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| -> Result<Vec<u8>, E> {
                    let mut read = Vec::new();
                    input.open_stream()?.read_to_end(&mut read)?;
                    Ok(read)
                })
            })
            .collect();
        for handle in handles {
            let read = handle.join().expect("reading thread doesn't panic")?;
            assert_eq!(read, content);
        }
        Ok::<(), E>(())
    })?;
    assert_eq!(input.hash()?, Sha256::digest(&content).as_slice());
    Ok(())
}

#[test]
fn shared_factory() -> Result<(), E> {
    let factory = InputFactory::new();
    thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|n| {
                let factory = &factory;
                scope.spawn(move || -> Result<(), E> {
                    let content = random_content(1000 + n);
                    let input = factory.read_bytes(&content, &format!("thread {n}"))?;
                    assert_eq!(input.hash()?, Sha256::digest(&content).as_slice());
                    Ok(())
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("hashing thread doesn't panic")?;
        }
        Ok::<(), E>(())
    })
}

#[test]
fn hash_published_across_threads() -> Result<(), E> {
    let usecase = UseCase::gen(1, 4096)?;
    let input = InputFactory::new().read_path(usecase.file(0)?)?;
    let hash = thread::scope(|scope| {
        scope
            .spawn(|| input.compute_hash().map(|hash| hash.to_vec()))
            .join()
            .expect("hashing thread doesn't panic")
    })?;
    // Joining the thread orders the publication before this read
    assert_eq!(input.hash()?, hash.as_slice());
    usecase.clean()?;
    Ok(())
}

#[test]
fn racing_compute_hash() -> Result<(), E> {
    let usecase = UseCase::gen(1, 4 * 1024 * 1024)?;
    let input = InputFactory::new().read_path(usecase.file(0)?)?;
    let barrier = Barrier::new(THREADS);
    let hashes = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| -> Result<Vec<u8>, E> {
                    barrier.wait();
                    Ok(input.compute_hash()?.to_vec())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("hashing thread doesn't panic"))
            .collect::<Result<Vec<_>, E>>()
    })?;
    let expected = Sha256::digest(std::fs::read(usecase.file(0)?)?);
    for hash in hashes {
        assert_eq!(hash, expected.as_slice());
    }
    usecase.clean()?;
    Ok(())
}
