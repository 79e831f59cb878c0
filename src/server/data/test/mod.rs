mod temp_voice;
