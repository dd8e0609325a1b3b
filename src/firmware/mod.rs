mod board;
mod oled;

use embassy_time::{Duration, Ticker};
use esp_hal::{
    analog::adc::{Adc, AdcConfig, Attenuation},
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    spi::{
        master::{Config as SpiConfig, Spi},
        Mode as SpiMode,
    },
    time::Rate,
    timer::timg::TimerGroup,
};

use defuser::{
    active_config,
    drivers::paged_oled::PagedFrame,
    framework::{Scheduler, MAX_STEPS_PER_CYCLE},
    render::ScreenPainter,
};

use self::{
    board::{EspBoard, Joystick},
    oled::Ssd1306,
};

const DOTSTAR_SPI_MHZ: u32 = 4;
const OLED_SPI_MHZ: u32 = 8;

pub(crate) fn run() -> ! {
    esp_println::logger::init_logger(log::LevelFilter::Info);

    let peripherals = esp_hal::init(esp_hal::Config::default());
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let mut adc_config = AdcConfig::new();
    let x = adc_config.enable_pin(peripherals.GPIO34, Attenuation::_11dB);
    let y = adc_config.enable_pin(peripherals.GPIO35, Attenuation::_11dB);
    let joystick = Joystick {
        adc: Adc::new(peripherals.ADC1, adc_config),
        x,
        y,
    };

    let pull_up = InputConfig::default().with_pull(Pull::Up);
    let touch = Input::new(peripherals.GPIO32, pull_up);
    let button = Input::new(peripherals.GPIO33, pull_up);

    let leds = Spi::new(
        peripherals.SPI2,
        SpiConfig::default()
            .with_frequency(Rate::from_mhz(DOTSTAR_SPI_MHZ))
            .with_mode(SpiMode::_0),
    )
    .expect("failed to init SPI2 for dotstar")
    .with_sck(peripherals.GPIO14)
    .with_mosi(peripherals.GPIO13);

    let oled_spi = Spi::new(
        peripherals.SPI3,
        SpiConfig::default()
            .with_frequency(Rate::from_mhz(OLED_SPI_MHZ))
            .with_mode(SpiMode::_0),
    )
    .expect("failed to init SPI3 for oled")
    .with_sck(peripherals.GPIO18)
    .with_mosi(peripherals.GPIO23);
    let oled = Ssd1306::new(
        oled_spi,
        Output::new(peripherals.GPIO16, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO5, Level::High, OutputConfig::default()),
        Output::new(peripherals.GPIO17, Level::High, OutputConfig::default()),
    );

    let board = EspBoard {
        joystick,
        touch,
        button,
        leds,
        oled,
        painter: ScreenPainter::new(PagedFrame::new()),
    };
    let scheduler = Scheduler::new(board, active_config());
    log::info!("defuser: board ready");

    let mut executor = esp_rtos::embassy::Executor::new();
    let executor = unsafe { make_static(&mut executor) };
    executor.run(move |spawner| {
        spawner.must_spawn(game_task(scheduler));
    });
}

#[embassy_executor::task]
async fn game_task(mut scheduler: Scheduler<EspBoard>) {
    let quantum_ms = active_config().timing.scheduler_quantum_ms;
    let mut ticker = Ticker::every(Duration::from_millis(u64::from(quantum_ms)));
    scheduler.run_until_idle(MAX_STEPS_PER_CYCLE);

    loop {
        ticker.next().await;
        scheduler.cycle(quantum_ms);
    }
}

unsafe fn make_static<T>(value: &mut T) -> &'static mut T {
    unsafe { core::mem::transmute(value) }
}
