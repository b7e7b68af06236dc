use chrono::Utc;
use criterion::{criterion_group, criterion_main, Criterion};
use genepet_core::genome::{inherit, self_replicate, SELF_BREED_MUTATION_RATE};
use genepet_core::{Gender, Genome, PetService, SpeciesId};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_breeding(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Genome::random(&mut rng);
    let b = Genome::random(&mut rng);

    c.bench_function("inherit_40_fields", |bench| {
        bench.iter(|| inherit(&a, &b, &mut rng))
    });

    c.bench_function("self_replicate_40_fields", |bench| {
        bench.iter(|| self_replicate(&a, SELF_BREED_MUTATION_RATE, &mut rng))
    });

    let service = PetService::bundled().expect("bundled catalog");
    let now = Utc::now();
    let mut mom = service
        .create_pet(1, "Mom", SpeciesId::CAT, now, &mut rng)
        .expect("cat exists");
    let mut dad = service
        .create_pet(1, "Dad", SpeciesId::PARROT, now, &mut rng)
        .expect("parrot exists");
    for (pet, gender) in [(&mut mom, Gender::Female), (&mut dad, Gender::Male)] {
        pet.gender = gender;
        while pet.level < 30 {
            let need = pet.exp_to_next_level();
            pet.gain_exp(need, now);
        }
        pet.happiness = 100;
    }

    c.bench_function("breed_cat_x_parrot", |bench| {
        bench.iter(|| {
            mom.last_breed_at = None;
            dad.last_breed_at = None;
            service.breed(&mut mom, &mut dad, "Kit", 1, now, &mut rng)
        })
    });

    c.bench_function("predict_cat_x_parrot", |bench| {
        bench.iter(|| service.predict(&mom, &dad))
    });
}

criterion_group!(benches, bench_breeding);
criterion_main!(benches);
