//! Genepet CLI — hatch, raise and breed pets from the terminal
//!
//! Commands:
//!   genepet species  — list the species catalog
//!   genepet fusions  — list fusion pairings
//!   genepet hatch    — create a new egg
//!   genepet list     — list stored pets
//!   genepet show     — show one pet in detail
//!   genepet feed / play / clean / rest / grow — care for a pet
//!   genepet decay    — run one status-decay pass over every pet
//!   genepet breed    — breed two pets
//!   genepet split    — self-replicate an asexual pet
//!   genepet predict  — forecast offspring species
//!   genepet demo     — run a full demo in memory

use chrono::{Duration, Utc};
use genepet_core::pet::LogSink;
use genepet_core::species::InterpreterFactory;
use genepet_core::{
    CatalogConfig, EventSink, FoodType, Pet, PetRepository, PetService, PetStore, SpeciesId, Stage,
};
use std::env;

const STORE_FILE: &str = "genepet-store.json";
const CONFIG_ENV: &str = "GENEPET_SPECIES_CONFIG";
const OWNER_ID: u64 = 1;

fn print_usage() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║        Genepet v0.1 — heritable pet genomes                  ║
╚══════════════════════════════════════════════════════════════╝

Usage: genepet <command> [options]

Commands:
  species                                 List the species catalog
  fusions                                 List fusion pairings
  hatch    <name> [species-id]            Create an egg (random species if omitted)
  list                                    List stored pets
  show     <id>                           Show one pet
  feed     <id> [basic|premium|special]   Feed a pet
  play     <id>                           Play with a pet
  clean    <id>                           Clean a pet
  rest     <id>                           Let a pet rest
  grow     <id> <exp>                     Grant experience (hatches eggs)
  decay    [hours]                        Decay every pet's status
  breed    <id-a> <id-b> <child-name>     Breed two pets
  split    <id> <child-name>              Self-replicate an asexual pet
  predict  <id-a> <id-b>                  Forecast offspring species
  demo                                    Run a full demo in memory

Pets are addressed by id or unique id prefix.
Set {CONFIG_ENV} to load a custom species catalog.
"#
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let service = match load_service() {
        Some(svc) => svc,
        None => return,
    };

    match args[1].as_str() {
        "species" => cmd_species(&service),
        "fusions" => cmd_fusions(&service),
        "hatch" => cmd_hatch(&service, &args[2..]),
        "list" => cmd_list(&service),
        "show" => cmd_show(&service, &args[2..]),
        "feed" | "play" | "clean" | "rest" => cmd_care(&service, &args[1], &args[2..]),
        "grow" => cmd_grow(&service, &args[2..]),
        "decay" => cmd_decay(&service, &args[2..]),
        "breed" => cmd_breed(&service, &args[2..]),
        "split" => cmd_split(&service, &args[2..]),
        "predict" => cmd_predict(&service, &args[2..]),
        "demo" => cmd_demo(&service),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
        }
    }
}

fn load_service() -> Option<PetService> {
    let config = match env::var(CONFIG_ENV) {
        Ok(path) => CatalogConfig::from_file(&path),
        Err(_) => CatalogConfig::bundled(),
    };
    match config.and_then(|cfg| PetService::from_config(&cfg, &InterpreterFactory::default())) {
        Ok(svc) => Some(svc),
        Err(e) => {
            eprintln!("  Failed to load species catalog: {}", e);
            None
        }
    }
}

fn load_store() -> PetStore {
    PetStore::open(STORE_FILE, "local")
}

fn save_store(store: &PetStore) {
    match store.flush() {
        Ok(()) => println!("  Saved to {}", STORE_FILE),
        Err(e) => eprintln!("  Failed to save: {}", e),
    }
}

fn find_pet(service: &PetService, store: &PetStore, id: &str) -> Option<Pet> {
    match store.resolve(id).and_then(|id| service.load_pet(store, id)) {
        Ok(pet) => Some(pet),
        Err(e) => {
            eprintln!("  {}", e);
            None
        }
    }
}

fn publish(pet: &mut Pet) {
    let events = pet.drain_events();
    for event in &events {
        println!("  → {}", event.event_name());
    }
    LogSink.publish_all(events);
}

fn short(pet: &Pet) -> String {
    pet.id.to_string()[..8].to_string()
}

fn one_line(service: &PetService, pet: &Pet) -> String {
    let species = service
        .catalog()
        .get(pet.species_id)
        .map_or("?", |s| s.name.as_str());
    format!(
        "[{}] {:<12} {:<14} {} {:<8} Lv{:<3} gen {} | H{} J{} C{} E{}",
        short(pet),
        pet.name,
        species,
        pet.gender.symbol(),
        pet.stage().name(),
        pet.level,
        pet.generation,
        pet.hunger,
        pet.happiness,
        pet.cleanliness,
        pet.energy
    )
}

fn print_pet(service: &PetService, pet: &Pet) {
    println!("  {}", one_line(service, pet));
    println!("    genome:      {}", pet.genome().code());
    println!("    appearance:  {}", pet.appearance);
    for part in pet.special.parts() {
        println!("    part:        {} = {} (mod {})", part.part_type.name(), part.style_name, part.modifier);
    }
    println!("    personality: {}", pet.personality.describe());
    println!(
        "    skill:       {} Lv{} ★{} - {}",
        pet.skill.name(),
        pet.skill.level,
        pet.skill.strength,
        pet.skill.description()
    );
    println!("    exp:         {}/{}", pet.exp, pet.level * 100);
    println!("    score:       {}", service.pet_score(pet));
}

fn cmd_species(service: &PetService) {
    println!("\n  Species ({}):", service.catalog().len());
    println!("  {}", "-".repeat(70));
    for s in service.catalog().all() {
        let genders: Vec<&str> = s.gender_rule.allowed().map(|g| g.symbol()).collect();
        println!(
            "  {:>4} {:<14} {:<10} rarity {} {:<8} genders {}{}",
            s.id.0,
            s.name,
            format!("{:?}", s.category),
            s.rarity,
            s.interpreter.archetype(),
            genders.join(""),
            if s.is_hidden { "  (hidden)" } else { "" }
        );
    }
}

fn cmd_fusions(service: &PetService) {
    let catalog = service.catalog();
    let name = |id: SpeciesId| catalog.get(id).map_or(format!("#{}", id), |s| s.name.clone());
    println!("\n  Fusions ({}):", service.engine().fusions().len());
    println!("  {}", "-".repeat(70));
    for (pair, fusion) in service.engine().fusions().entries() {
        println!(
            "  {:<14} × {:<14} → {:<10} trigger > {:<3} rarity {}",
            name(pair.first()),
            name(pair.second()),
            name(fusion.result),
            fusion.trigger_threshold,
            fusion.rarity
        );
    }
}

fn cmd_hatch(service: &PetService, args: &[String]) {
    if args.is_empty() {
        eprintln!("Usage: genepet hatch <name> [species-id]");
        return;
    }
    let mut rng = rand::thread_rng();
    let now = Utc::now();
    let created = match args.get(1).map(|s| s.parse::<u16>()) {
        Some(Ok(id)) => service.create_pet(OWNER_ID, &args[0], SpeciesId(id), now, &mut rng),
        Some(Err(_)) => {
            eprintln!("  Species id must be a number");
            return;
        }
        None => service.create_random_pet(OWNER_ID, &args[0], now, &mut rng),
    };
    let mut pet = match created {
        Ok(pet) => pet,
        Err(e) => {
            eprintln!("  {}", e);
            return;
        }
    };

    let mut store = load_store();
    publish(&mut pet);
    print_pet(service, &pet);
    if let Err(e) = store.save(&pet) {
        eprintln!("  {}", e);
        return;
    }
    save_store(&store);
}

fn cmd_list(service: &PetService) {
    let store = load_store();
    let mut pets = match store.find_by_owner(OWNER_ID) {
        Ok(pets) => pets,
        Err(e) => {
            eprintln!("  {}", e);
            return;
        }
    };
    if pets.is_empty() {
        println!("\n  No pets. Use 'genepet hatch' or 'genepet demo' to get started.");
        return;
    }
    println!("\n  {}", store.summary());
    println!("  {}", "-".repeat(90));
    for pet in pets.iter_mut() {
        service.refresh(pet);
        println!("  {}", one_line(service, pet));
    }
}

fn cmd_show(service: &PetService, args: &[String]) {
    let Some(id) = args.first() else {
        eprintln!("Usage: genepet show <id>");
        return;
    };
    let store = load_store();
    if let Some(pet) = find_pet(service, &store, id) {
        print_pet(service, &pet);
    }
}

fn cmd_care(service: &PetService, action: &str, args: &[String]) {
    let Some(id) = args.first() else {
        eprintln!("Usage: genepet {} <id>", action);
        return;
    };
    let mut store = load_store();
    let Some(mut pet) = find_pet(service, &store, id) else {
        return;
    };

    let now = Utc::now();
    let outcome = match action {
        "feed" => {
            let food = match args.get(1) {
                Some(s) => match FoodType::parse(s) {
                    Some(food) => food,
                    None => {
                        eprintln!("  Unknown food '{}'", s);
                        return;
                    }
                },
                None => FoodType::Basic,
            };
            pet.feed(food, now)
        }
        "play" => pet.play(now),
        "clean" => pet.clean(now),
        _ => pet.rest().map(|()| 0),
    };

    match outcome {
        Ok(exp) => {
            println!("  {} {}: +{} exp", action, pet.name, exp);
            publish(&mut pet);
            println!(
                "  H{} J{} C{} E{} | Lv{} {}",
                pet.hunger, pet.happiness, pet.cleanliness, pet.energy, pet.level, pet.stage()
            );
            if let Err(e) = store.save(&pet) {
                eprintln!("  {}", e);
                return;
            }
            save_store(&store);
        }
        Err(e) => eprintln!("  Cannot {} {}: {}", action, pet.name, e),
    }
}

fn cmd_grow(service: &PetService, args: &[String]) {
    if args.len() < 2 {
        eprintln!("Usage: genepet grow <id> <exp>");
        return;
    }
    let Ok(amount) = args[1].parse::<u32>() else {
        eprintln!("  Experience must be a number");
        return;
    };
    let mut store = load_store();
    let Some(mut pet) = find_pet(service, &store, &args[0]) else {
        return;
    };
    pet.gain_exp(amount, Utc::now());
    publish(&mut pet);
    println!("  {} is now Lv{} ({})", pet.name, pet.level, pet.stage());
    if let Err(e) = store.save(&pet) {
        eprintln!("  {}", e);
        return;
    }
    save_store(&store);
}

fn cmd_decay(service: &PetService, args: &[String]) {
    let hours: f64 = args.first().and_then(|s| s.parse().ok()).unwrap_or(1.0);
    let mut store = load_store();
    let mut sink = LogSink;
    match service.decay_all(&mut store, hours, Utc::now(), &mut sink) {
        Ok(report) => {
            println!(
                "  Decayed {} pets by {:.1}h ({} failed, {} events)",
                report.visited, hours, report.failed, report.events
            );
            save_store(&store);
        }
        Err(e) => eprintln!("  Decay failed: {}", e),
    }
}

fn cmd_breed(service: &PetService, args: &[String]) {
    if args.len() < 3 {
        eprintln!("Usage: genepet breed <id-a> <id-b> <child-name>");
        return;
    }
    let mut store = load_store();
    let (Some(mut a), Some(mut b)) = (find_pet(service, &store, &args[0]), find_pet(service, &store, &args[1])) else {
        return;
    };
    if a.id == b.id {
        eprintln!("  A pet cannot breed with itself; use 'genepet split'");
        return;
    }

    let mut rng = rand::thread_rng();
    match service.breed(&mut a, &mut b, &args[2], OWNER_ID, Utc::now(), &mut rng) {
        Ok(result) => {
            let mut child = result.child;
            if let Some((x, y)) = result.fusion_from {
                println!("  ✨ Fusion of {} and {}!", x, y);
            }
            publish(&mut child);
            print_pet(service, &child);
            for pet in [&a, &b, &child] {
                if let Err(e) = store.save(pet) {
                    eprintln!("  {}", e);
                    return;
                }
            }
            save_store(&store);
        }
        Err(e) => eprintln!("  Cannot breed: {}", e),
    }
}

fn cmd_split(service: &PetService, args: &[String]) {
    if args.len() < 2 {
        eprintln!("Usage: genepet split <id> <child-name>");
        return;
    }
    let mut store = load_store();
    let Some(mut parent) = find_pet(service, &store, &args[0]) else {
        return;
    };
    let mut rng = rand::thread_rng();
    match service.self_breed(&mut parent, &args[1], OWNER_ID, Utc::now(), &mut rng) {
        Ok(result) => {
            let mut child = result.child;
            publish(&mut child);
            print_pet(service, &child);
            for pet in [&parent, &child] {
                if let Err(e) = store.save(pet) {
                    eprintln!("  {}", e);
                    return;
                }
            }
            save_store(&store);
        }
        Err(e) => eprintln!("  Cannot self-breed: {}", e),
    }
}

fn cmd_predict(service: &PetService, args: &[String]) {
    if args.len() < 2 {
        eprintln!("Usage: genepet predict <id-a> <id-b>");
        return;
    }
    let store = load_store();
    let (Some(a), Some(b)) = (find_pet(service, &store, &args[0]), find_pet(service, &store, &args[1])) else {
        return;
    };
    println!("\n  Offspring forecast for {} × {}:", a.name, b.name);
    for p in service.predict(&a, &b) {
        let name = service
            .catalog()
            .get(p.species_id)
            .map_or(format!("#{}", p.species_id), |s| s.name.clone());
        println!(
            "  {:>3}%  {}{}",
            p.probability,
            name,
            if p.is_hidden { " (hidden)" } else { "" }
        );
    }
    if let Err(e) = service.can_breed_pair(&a, &b, Utc::now()) {
        println!("  Not ready to breed yet: {}", e);
    }
}

fn cmd_demo(service: &PetService) {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║              Genepet — Full Demo                             ║
║       Hatch + Care + Breed + Fusion + Decay                  ║
╚══════════════════════════════════════════════════════════════╝
"#
    );
    let mut rng = rand::thread_rng();
    let mut store = PetStore::in_memory("demo");
    let mut now = Utc::now();

    println!("Step 1: Hatching a cat and a parrot...");
    println!("{}", "-".repeat(60));
    let mut pets = Vec::new();
    for (name, species) in [("Mochi", SpeciesId::CAT), ("Kiwi", SpeciesId::PARROT)] {
        match service.create_pet(OWNER_ID, name, species, now, &mut rng) {
            Ok(pet) => pets.push(pet),
            Err(e) => {
                eprintln!("  {}", e);
                return;
            }
        }
    }
    for pet in pets.iter_mut() {
        publish(pet);
        print_pet(service, pet);
    }

    println!("\nStep 2: Raising them to adulthood...");
    println!("{}", "-".repeat(60));
    for pet in pets.iter_mut() {
        pet.gain_exp(300, now);
        let mut care_rounds = 0;
        while pet.stage() < Stage::Adult && care_rounds < 500 {
            care_rounds += 1;
            now += Duration::hours(2);
            pet.decay_status(2.0, now);
            let _ = pet.feed(FoodType::Premium, now);
            let _ = pet.clean(now);
            if pet.play(now).is_err() {
                let _ = pet.rest();
            }
            let _ = pet.drain_events();
            pet.gain_exp(150, now);
        }
        println!("  {}", one_line(service, pet));
    }

    println!("\nStep 3: Forecast and breed...");
    println!("{}", "-".repeat(60));
    let (first, rest) = pets.split_at_mut(1);
    let (a, b) = (&mut first[0], &mut rest[0]);
    for p in service.predict(a, b) {
        println!("  {:>3}% species {}{}", p.probability, p.species_id, if p.is_hidden { " (hidden)" } else { "" });
    }
    if a.gender == b.gender {
        println!("  Same gender ({}), no breeding this time", a.gender.name());
    } else {
        match service.breed(a, b, "Sprout", OWNER_ID, now, &mut rng) {
            Ok(result) => {
                let mut child = result.child;
                if result.is_hidden {
                    println!("  ✨ Hidden species!");
                }
                publish(&mut child);
                print_pet(service, &child);
                let _ = store.save(&child);
            }
            Err(e) => println!("  Breeding refused: {}", e),
        }
    }

    println!("\nStep 4: A day passes...");
    println!("{}", "-".repeat(60));
    for pet in &pets {
        let _ = store.save(pet);
    }
    let mut events = Vec::new();
    match service.decay_all(&mut store, 24.0, now + Duration::hours(24), &mut events) {
        Ok(report) => println!("  {} pets decayed, {} warnings raised", report.visited, events.len()),
        Err(e) => eprintln!("  {}", e),
    }
    println!("  {}", store.summary());
}
