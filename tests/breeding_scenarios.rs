use chrono::{Duration, Utc};
use genepet_core::genome::{
    inherit, inherit_traced, self_replicate, FieldSource, InheritanceBands, RecessiveRule,
    ScriptedDice, GENOME_LEN, HIDDEN_TRIGGER_PAIR,
};
use genepet_core::species::interpreter::Griffin;
use genepet_core::species::GeneInterpreter;
use genepet_core::traits::{Appearance, Personality, Skill};
use genepet_core::{FoodType, Gender, Genome, Pet, PetError, PetService, SpeciesId, Stage};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn service() -> PetService {
    PetService::bundled().unwrap()
}

fn adult(svc: &PetService, species: SpeciesId, gender: Gender, genome: Genome) -> Pet {
    let s = svc.catalog().get(species).unwrap();
    let mut pet = Pet::new(1, "Parent", s, genome, gender, Utc::now());
    while pet.level < 30 {
        let need = pet.exp_to_next_level();
        pet.gain_exp(need, Utc::now());
    }
    pet.happiness = 90;
    pet.drain_events();
    pet
}

#[test]
fn traits_are_a_pure_function_of_the_genome() {
    let svc = service();
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..50 {
        let g = Genome::random(&mut rng);
        assert_eq!(Appearance::from_genome(&g), Appearance::from_genome(&g));
        assert_eq!(Personality::from_genome(&g), Personality::from_genome(&g));
        assert_eq!(Skill::from_genome(&g), Skill::from_genome(&g));
        let a = svc.catalog().interpret(SpeciesId::CAT, &g);
        let b = svc.catalog().interpret(SpeciesId::CAT, &g);
        assert_eq!(a, b);
    }
}

#[test]
fn self_replication_mutation_rate_extremes() {
    let mut rng = StdRng::seed_from_u64(2);
    let parent = Genome::random(&mut rng);
    for _ in 0..20 {
        assert_eq!(self_replicate(&parent, 0.0, &mut rng), parent);
    }

    // a redraw keeps the old value 1 time in 16
    let mut changed = 0;
    let trials = 200;
    for _ in 0..trials {
        changed += self_replicate(&parent, 1.0, &mut rng).distance(&parent);
    }
    let ratio = changed as f64 / (trials * GENOME_LEN) as f64;
    assert!((ratio - 15.0 / 16.0).abs() < 0.02, "ratio {ratio}");
}

#[test]
fn inheritance_sources_converge_to_bands() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = Genome::random(&mut rng);
    let b = Genome::random(&mut rng);
    let mut tally = [0usize; 4];
    let children = 3000;
    for _ in 0..children {
        let (_, sources) =
            inherit_traced(&a, &b, &InheritanceBands::default(), &RecessiveRule::default(), &mut rng);
        for source in sources {
            let idx = match source {
                FieldSource::Parent1 => 0,
                FieldSource::Parent2 => 1,
                FieldSource::Blend => 2,
                FieldSource::Mutation => 3,
            };
            tally[idx] += 1;
        }
    }
    let total = (children * GENOME_LEN) as f64;
    let expected = [0.45, 0.45, 0.07, 0.03];
    for (count, want) in tally.iter().zip(expected) {
        let got = *count as f64 / total;
        assert!((got - want).abs() < 0.01, "got {got}, want {want}");
    }
}

#[test]
fn matching_recessive_field_always_passes_down() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..200 {
        let mut fa = *Genome::random(&mut rng).fields();
        let mut fb = *Genome::random(&mut rng).fields();
        fa[37] = 7;
        fb[37] = 7;
        let child = inherit(&Genome::from_fields(fa), &Genome::from_fields(fb), &mut rng);
        assert_eq!(child.field_at(37), 7);
    }
}

#[test]
fn same_species_always_breeds_true() {
    let svc = service();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..30 {
        let mut mom = adult(&svc, SpeciesId::DOG, Gender::Female, Genome::random(&mut rng));
        let mut dad = adult(&svc, SpeciesId::DOG, Gender::Male, Genome::random(&mut rng));
        let result = svc.breed(&mut mom, &mut dad, "Pup", 1, Utc::now(), &mut rng).unwrap();
        assert_eq!(result.species_id, SpeciesId::DOG);
        assert!(!result.is_hidden);
    }
}

#[test]
fn stages_advance_exactly_at_thresholds() {
    let svc = service();
    let mut rng = StdRng::seed_from_u64(6);
    let mut pet = svc.create_pet(1, "Grow", SpeciesId::CAT, Utc::now(), &mut rng).unwrap();
    let mut last = pet.stage();
    while pet.level < 60 {
        let need = pet.exp_to_next_level();
        pet.gain_exp(need, Utc::now());
        assert!(pet.stage() >= last);
        assert_eq!(pet.stage(), Stage::for_level(pet.level), "level {}", pet.level);
        last = pet.stage();
    }
    assert_eq!(pet.stage(), Stage::Elderly);
}

#[test]
fn gender_compatibility() {
    use Gender::*;
    for g in [None, Male, Female, Hermaphrodite] {
        assert!(!None.can_breed_with(g));
        assert!(!g.can_breed_with(None));
    }
    for g in [Male, Female, Hermaphrodite] {
        assert!(Hermaphrodite.can_breed_with(g));
    }
    assert!(!Male.can_breed_with(Male));
    assert!(!Female.can_breed_with(Female));
}

#[test]
fn cross_species_roll_scenarios() {
    let svc = service();
    let g = Genome::from_fields([0xf; GENOME_LEN]);
    let engine = svc.engine();
    let (cat, dog) = (SpeciesId::CAT, SpeciesId::DOG);

    let got = engine.resolve_child_species(cat, dog, &g, &mut ScriptedDice::new(vec![70]));
    assert_eq!(got, (dog, false));

    // no fusion for (101, 102): coin flip between the parents
    for coin in [0, 1] {
        let got = engine.resolve_child_species(cat, dog, &g, &mut ScriptedDice::new(vec![95, coin]));
        assert!(!got.1);
        assert_eq!(got.0, if coin == 0 { cat } else { dog });
    }
}

#[test]
fn fusion_breeding_end_to_end() {
    let svc = service();
    let mut fields = [3u8; GENOME_LEN];
    fields[HIDDEN_TRIGGER_PAIR] = 0xf;
    fields[HIDDEN_TRIGGER_PAIR + 1] = 0xf;
    let genome = Genome::from_fields(fields);
    let mut cat = adult(&svc, SpeciesId::CAT, Gender::Female, genome);
    let mut parrot = adult(&svc, SpeciesId::PARROT, Gender::Male, genome);

    // every field from parent 1, then the fusion band
    let mut script = vec![0u32; GENOME_LEN];
    script.push(95);
    let mut dice = ScriptedDice::new(script);

    let result = svc.breed(&mut cat, &mut parrot, "Gryph", 1, Utc::now(), &mut dice).unwrap();
    assert!(result.is_hidden);
    assert_eq!(result.species_id, SpeciesId::GRIFFIN);
    assert_eq!(result.fusion_from, Some((SpeciesId::CAT, SpeciesId::PARROT)));
    assert_eq!(*result.child.genome(), genome);
    assert_eq!(result.child.special, Griffin.interpret(&genome));
    assert_eq!(result.child.generation, 1);
}

#[test]
fn predictor_formula() {
    let svc = service();
    let mut rng = StdRng::seed_from_u64(7);
    let cat = adult(&svc, SpeciesId::CAT, Gender::Female, Genome::random(&mut rng));
    let owl = adult(&svc, SpeciesId::OWL, Gender::Male, Genome::random(&mut rng));
    // threshold 190: hidden = 10 × 65 / 255 = 2
    let forecast = svc.predict(&cat, &owl);
    let probs: Vec<u32> = forecast.iter().map(|p| p.probability).collect();
    assert_eq!(probs, vec![49, 49, 2]);
    assert_eq!(forecast[2].species_id, SpeciesId::GRIFFIN);
}

#[test]
fn feeding_clamps_hunger() {
    let svc = service();
    let mut rng = StdRng::seed_from_u64(8);
    let mut pet = svc.create_pet(1, "Full", SpeciesId::CAT, Utc::now(), &mut rng).unwrap();
    assert_eq!(pet.feed(FoodType::Basic, Utc::now()), Err(PetError::PetIsEgg));

    pet.gain_exp(300, Utc::now());
    assert_eq!(pet.stage(), Stage::Child);
    pet.hunger = 90;
    pet.feed(FoodType::Basic, Utc::now()).unwrap();
    assert_eq!(pet.hunger, 100);
    assert_eq!(pet.feed(FoodType::Basic, Utc::now()), Err(PetError::PetIsFull));
}

#[test]
fn cooldowns_follow_the_breeding_mode() {
    let svc = service();
    let mut rng = StdRng::seed_from_u64(9);
    let now = Utc::now();
    let mut slime = adult(&svc, SpeciesId::SLIME, Gender::None, Genome::random(&mut rng));
    svc.self_breed(&mut slime, "Blob", 1, now, &mut rng).unwrap();

    let later = now + Duration::hours(30);
    assert_eq!(svc.can_self_breed(&slime, later), Err(PetError::BreedCooldownActive));
    assert_eq!(svc.engine().breeding_cooldown(&slime, true, later), Duration::hours(18));

    let mut cat = adult(&svc, SpeciesId::CAT, Gender::Female, Genome::random(&mut rng));
    assert_eq!(
        svc.self_breed(&mut cat, "x", 1, now, &mut rng).unwrap_err(),
        PetError::CannotSelfBreed
    );
}
