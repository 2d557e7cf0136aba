use criterion::{Criterion, black_box, criterion_group, criterion_main};
use miqat_astro::{SolarCoordinates, SolarTime};
use miqat_salat::{
    CalculationMethod, CalendarDate, Coordinates, PrayerTimes, SunnahTimes, qibla_bearing,
};

fn solar_bench(c: &mut Criterion) {
    let coords = Coordinates::new(35.7750, -78.6336).unwrap();
    let date = CalendarDate::new(2015, 7, 12).unwrap();
    let jd = date.julian_day();

    let mut group = c.benchmark_group("solar");
    group.bench_function("solar_coordinates", |b| {
        b.iter(|| SolarCoordinates::new(black_box(jd)))
    });
    group.bench_function("solar_time", |b| {
        b.iter(|| SolarTime::new(black_box(date), black_box(coords)))
    });
    group.finish();
}

fn prayer_bench(c: &mut Criterion) {
    let raleigh = Coordinates::new(35.7750, -78.6336).unwrap();
    let oslo = Coordinates::new(59.9094, 10.7349).unwrap();
    let date = CalendarDate::new(2016, 1, 1).unwrap();
    let mwl = CalculationMethod::MuslimWorldLeague.parameters();
    let msc = CalculationMethod::MoonsightingCommittee.parameters();

    let mut group = c.benchmark_group("prayer_times");
    group.bench_function("muslim_world_league", |b| {
        b.iter(|| PrayerTimes::new(black_box(raleigh), black_box(date), mwl))
    });
    group.bench_function("moonsighting_high_latitude", |b| {
        b.iter(|| PrayerTimes::new(black_box(oslo), black_box(date), msc))
    });
    group.finish();

    let today = PrayerTimes::new(raleigh, date, mwl).unwrap();
    let mut group = c.benchmark_group("derived");
    group.bench_function("sunnah_times", |b| {
        b.iter(|| SunnahTimes::new(black_box(&today)))
    });
    group.bench_function("qibla", |b| b.iter(|| qibla_bearing(black_box(raleigh))));
    group.finish();
}

criterion_group!(benches, solar_bench, prayer_bench);
criterion_main!(benches);
