/*
    Resource Allocation Module
*/

use super::*;

assign_resources! {
    mic: MicResources {
        ADC: ADC,
        MIC_PIN: PIN_26,
    },

    alert: AlertResources {
        BUZZER_PIN: PIN_15,
    },

    heartbeat: HeartbeatResources {
        LED_PIN: PIN_25,
    },

    telemetry: TelemetryResources {
        UART: UART0,
        TX_PIN: PIN_0,
        RX_PIN: PIN_1,
    },
}

bind_interrupts!(pub struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
    UART0_IRQ => BufferedInterruptHandler<peripherals::UART0>;
});
