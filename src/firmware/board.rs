use esp_hal::{
    analog::adc::{Adc, AdcPin},
    gpio::Input,
    peripherals::{ADC1, GPIO34, GPIO35},
    spi::master::Spi,
    Blocking,
};

use defuser::{
    drivers::{dotstar::encode_frame, paged_oled::PagedFrame},
    model::{AxisSample, LedFrame, ScreenContext, ScreenKind},
    render::ScreenPainter,
    InputPin, Peripherals,
};

use super::oled::Ssd1306;

pub(crate) struct Joystick {
    pub(crate) adc: Adc<'static, ADC1<'static>, Blocking>,
    pub(crate) x: AdcPin<GPIO34<'static>, ADC1<'static>>,
    pub(crate) y: AdcPin<GPIO35<'static>, ADC1<'static>>,
}

impl Joystick {
    fn read(&mut self) -> AxisSample {
        let x = read_blocking(&mut self.adc, &mut self.x);
        let y = read_blocking(&mut self.adc, &mut self.y);
        AxisSample::new(x, y)
    }
}

fn read_blocking<PIN>(
    adc: &mut Adc<'static, ADC1<'static>, Blocking>,
    pin: &mut AdcPin<PIN, ADC1<'static>>,
) -> u16
where
    PIN: esp_hal::analog::adc::AdcChannel,
{
    loop {
        if let Ok(value) = adc.read_oneshot(pin) {
            return value;
        }
    }
}

/// The game's view of the ESP32 board.
pub(crate) struct EspBoard {
    pub(crate) joystick: Joystick,
    pub(crate) touch: Input<'static>,
    pub(crate) button: Input<'static>,
    pub(crate) leds: Spi<'static, Blocking>,
    pub(crate) oled: Ssd1306,
    pub(crate) painter: ScreenPainter<PagedFrame>,
}

impl Peripherals for EspBoard {
    fn prepare_display(&mut self) {
        if let Err(err) = self.oled.init() {
            log::warn!("board: oled init failed err={:?}", err);
        }
        let _ = self.painter.clear();
        self.painter.display_mut().begin_flush();
    }

    fn render_screen(&mut self, kind: ScreenKind, param: u16, context: &ScreenContext) {
        let _ = self.painter.render(kind, param, context);
        self.painter.display_mut().begin_flush();
    }

    fn set_led_colors(&mut self, frame: &LedFrame) {
        let mut bytes = encode_frame(frame);
        if let Err(err) = self.leds.transfer(&mut bytes) {
            log::warn!("board: dotstar write failed err={:?}", err);
        }
    }

    fn read_joystick_axes(&mut self) -> AxisSample {
        self.joystick.read()
    }

    fn read_digital(&mut self, pin: InputPin) -> bool {
        match pin {
            InputPin::TouchSensor => self.touch.is_high(),
            InputPin::JoystickButton => self.button.is_high(),
        }
    }

    /// Pushes one OLED page per poll; busy until the last page is out.
    fn display_is_busy(&mut self) -> bool {
        let Some((page, bytes)) = self.painter.display_mut().next_page() else {
            return false;
        };
        if let Err(err) = self.oled.write_page(page, &bytes) {
            log::warn!("board: oled page write failed page={} err={:?}", page, err);
        }
        true
    }
}
